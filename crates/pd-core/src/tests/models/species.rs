use crate::Species;

use std::str::FromStr;

#[test]
fn test_species_from_str_ignores_case() {
    assert_eq!(Species::from_str("Cattle").unwrap(), Species::Cattle);
    assert_eq!(Species::from_str("BUFFALO").unwrap(), Species::Buffalo);
    assert!(Species::from_str("goat").is_err());
}

#[test]
fn test_species_serializes_as_display_name() {
    let json = serde_json::to_string(&Species::Buffalo).unwrap();
    assert_eq!(json, "\"Buffalo\"");
}
