use {
    super::result::{AvsResult, CvvResult},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Outcome of a single gateway operation.
///
/// A declined transaction is still a `Response`, with `success == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
    /// Every field the vendor returned, verbatim.
    pub params: BTreeMap<String, String>,
    pub test: bool,
    pub authorization: Option<String>,
    pub fraud_review: bool,
    pub avs_result: AvsResult,
    pub cvv_result: CvvResult,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
