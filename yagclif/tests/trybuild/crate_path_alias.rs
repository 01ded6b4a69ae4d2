//! Trybuild fixture verifying `#[yagclif(crate = "...")]` with a renamed
//! import.

use yagclif as cli;
use cli::Schema;

#[derive(Debug, Default, Schema)]
#[yagclif(crate = "cli")]
struct Aliased {
    #[yagclif("default:hello")]
    value: String,
}

fn main() {
    let (aliased, _) = cli::parse_from::<Aliased, [&str; 0]>([]).unwrap();
    assert_eq!(aliased.value, "hello");
}
