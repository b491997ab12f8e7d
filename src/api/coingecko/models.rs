use std::collections::HashMap;

/// Response of `/api/v3/simple/price`: coin id -> (vs currency -> price).
///
/// Ids the API does not know are left out entirely, and a known id may lack
/// some of the requested currencies or report one as `null`.
pub type SimplePriceResponse = HashMap<String, HashMap<String, Option<f64>>>;
