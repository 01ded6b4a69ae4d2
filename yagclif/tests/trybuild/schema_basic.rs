//! Trybuild fixture: every value kind on a flat struct.

use yagclif::{FieldShape, Schema, ValueKind};

#[derive(Debug, Default, Schema)]
struct Flat {
    #[yagclif("shortname:v")]
    verbose: bool,
    #[yagclif("default:8080")]
    port: u16,
    #[yagclif("description:host to bind")]
    host: String,
    #[yagclif("delimiter:,")]
    ids: Vec<i32>,
    tags: Vec<String>,
    #[yagclif("omit")]
    cache: std::collections::HashMap<String, f64>,
    r#type: String,
}

fn main() {
    let fields = Flat::fields();
    assert_eq!(fields.len(), 7);
    assert!(matches!(fields[1].shape, FieldShape::Value(ValueKind::Int)));
    assert!(matches!(fields[4].shape, FieldShape::Value(ValueKind::StringArray)));
    assert!(matches!(fields[5].shape, FieldShape::Omitted));
    assert_eq!(fields[6].name, "type");
    let (flat, _) = yagclif::parse_from::<Flat, _>(["--type", "x", "-v"]).unwrap();
    assert!(flat.verbose && flat.port == 8080 && flat.r#type == "x");
}
