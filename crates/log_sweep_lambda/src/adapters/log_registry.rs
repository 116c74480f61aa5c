/// One page of the prefix-filtered log-group listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogGroupPage {
    pub group_names: Vec<String>,
    pub next_token: Option<String>,
}

pub trait LogGroupRegistry {
    fn describe_log_groups_page(
        &self,
        name_prefix: &str,
        token: Option<&str>,
    ) -> Result<LogGroupPage, String>;

    fn delete_log_group(&self, group_name: &str) -> Result<(), String>;
}
