use pnet::util::MacAddr;

/// Packs a MAC address into the low 48 bits of a `u64`.
pub fn mac_to_u64(mac: MacAddr) -> u64 {
    let MacAddr(a, b, c, d, e, f) = mac;
    [a, b, c, d, e, f]
        .iter()
        .fold(0u64, |acc, octet| (acc << 8) | u64::from(*octet))
}

/// Upper-case hex digits of the address without separators.
pub fn mac_to_hex(mac: MacAddr) -> String {
    format!("{:012X}", mac_to_u64(mac))
}

/// Pads single-digit groups and accepts `-` as well as `:` separators.
///
/// `"a:b:c:d:e:f"` and `"0A-0B-0C-0D-0E-0F"` both become colon separated
/// two-digit groups.
pub fn normalize_mac(mac: &str) -> String {
    let separator: char = if mac.contains('-') { '-' } else { ':' };
    mac.split(separator)
        .map(|part| {
            if part.len() < 2 {
                format!("0{part}")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(":")
}

/// Parses a MAC address after normalizing its separators.
pub fn parse_mac(mac: &str) -> anyhow::Result<MacAddr> {
    let normalized: String = normalize_mac(mac.trim());
    normalized
        .parse::<MacAddr>()
        .map_err(|e| anyhow::anyhow!("invalid MAC address '{mac}': {e:?}"))
}
