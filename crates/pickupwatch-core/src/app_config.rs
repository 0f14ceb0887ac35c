#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the vendor pickup-availability endpoint.
    pub pickup_base_url: String,
    /// Vendor part number of the watched product, e.g. `MMEF2ZM/A`.
    pub part_number: String,
    /// Product name used in share messages.
    pub product_label: String,
    /// Storefront page for the watched product.
    pub product_page_url: String,
    /// Postal code of the southern query location.
    pub location_south: String,
    /// Postal code of the northern query location.
    pub location_north: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
