use crate::traits::NodeInfo;

/// Whether the connected node can construct multi-path payments.
///
/// Issues one wallet-version query. Any failure of that query means
/// "unsupported"; this never fails the request.
pub async fn check_multipath_support(node: &dyn NodeInfo) -> bool {
    match node.wallet_version().await {
        Ok(version) => {
            tracing::debug!(%version, "multi-path payments supported");
            true
        }
        Err(e) => {
            tracing::debug!(error = %e, "multi-path payments unsupported");
            false
        }
    }
}
