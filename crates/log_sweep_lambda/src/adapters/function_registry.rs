/// One page of the function registry listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionPage {
    pub function_names: Vec<String>,
    pub next_marker: Option<String>,
}

pub trait FunctionRegistry {
    fn list_functions_page(&self, marker: Option<&str>) -> Result<FunctionPage, String>;
}
