use lnpath_core::{Route, RoutingResult};

use crate::error::RoutingError;

/// Choose the routes to return and enforce the fee budget.
///
/// The multi-path set wins whenever it is non-empty; otherwise the
/// single-path route is used. The budget applies to the chosen set only,
/// and a fee equal to `max_fee` is affordable.
pub fn select_routes(
    multi_path: Vec<Route>,
    single_path: Option<Route>,
    max_fee: u64,
) -> Result<RoutingResult, RoutingError> {
    let routes = if !multi_path.is_empty() {
        multi_path
    } else if let Some(route) = single_path {
        vec![route]
    } else {
        return Err(RoutingError::NoAffordablePathFound { fee: None, max_fee });
    };

    let result = RoutingResult::new(routes);
    if result.fee > max_fee {
        return Err(RoutingError::NoAffordablePathFound {
            fee: Some(result.fee),
            max_fee,
        });
    }

    Ok(result)
}
