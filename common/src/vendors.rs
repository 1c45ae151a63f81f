use pnet::util::MacAddr;

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given MAC address.
    ///
    /// # Arguments
    /// * `mac_addr` - The MAC address to lookup.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If no prefix of the address is known.
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String>;
}
