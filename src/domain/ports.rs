/// Read access to the settings the fetcher needs, whatever layer supplied them.
pub trait ConfigProvider: Send + Sync {
    /// Endpoint prefix; the `DD.MM.YYYY` date is appended verbatim.
    fn base_url(&self) -> &str;
    /// Currency codes kept from each response.
    fn currencies(&self) -> &[String];
}
