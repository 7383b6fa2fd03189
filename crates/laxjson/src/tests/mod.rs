mod arbitrary;
mod parse_good;
mod property_roundtrip;
