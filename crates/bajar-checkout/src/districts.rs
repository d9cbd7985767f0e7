//! Bundled district reference data.
//!
//! The storefront ships the district list with the client instead of
//! fetching it; pricing only ever consumes the "dhaka" substring predicate.

/// The 64 districts of Bangladesh, for the shipping district selector.
pub const DISTRICTS: &[&str] = &[
    "Bagerhat",
    "Bandarban",
    "Barguna",
    "Barishal",
    "Bhola",
    "Bogura",
    "Brahmanbaria",
    "Chandpur",
    "Chapainawabganj",
    "Chattogram",
    "Chuadanga",
    "Cox's Bazar",
    "Cumilla",
    "Dhaka",
    "Dinajpur",
    "Faridpur",
    "Feni",
    "Gaibandha",
    "Gazipur",
    "Gopalganj",
    "Habiganj",
    "Jamalpur",
    "Jashore",
    "Jhalokati",
    "Jhenaidah",
    "Joypurhat",
    "Khagrachhari",
    "Khulna",
    "Kishoreganj",
    "Kurigram",
    "Kushtia",
    "Lakshmipur",
    "Lalmonirhat",
    "Madaripur",
    "Magura",
    "Manikganj",
    "Meherpur",
    "Moulvibazar",
    "Munshiganj",
    "Mymensingh",
    "Naogaon",
    "Narail",
    "Narayanganj",
    "Narsingdi",
    "Natore",
    "Netrokona",
    "Nilphamari",
    "Noakhali",
    "Pabna",
    "Panchagarh",
    "Patuakhali",
    "Pirojpur",
    "Rajbari",
    "Rajshahi",
    "Rangamati",
    "Rangpur",
    "Satkhira",
    "Shariatpur",
    "Sherpur",
    "Sirajganj",
    "Sunamganj",
    "Sylhet",
    "Tangail",
    "Thakurgaon",
];

/// Whether a district name is in the known list (case-insensitive).
pub fn is_known_district(district: &str) -> bool {
    DISTRICTS
        .iter()
        .any(|d| d.eq_ignore_ascii_case(district.trim()))
}

/// Whether the destination falls under the Dhaka delivery tier.
///
/// Case-insensitive substring match, so "Dhaka", "dhaka north" and
/// "Old Dhaka" all qualify.
pub fn is_dhaka_metro(district: &str) -> bool {
    district.to_lowercase().contains("dhaka")
}
