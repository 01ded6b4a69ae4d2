//! Trybuild fixture: nested schemas and generic structs.

use yagclif::Schema;

#[derive(Debug, Default, Schema)]
struct Logging {
    #[yagclif("shortname:q")]
    quiet: bool,
}

#[derive(Debug, Default, Schema)]
struct Server<T: Default> {
    #[yagclif("shortname:p")]
    port: u16,
    logging: Logging,
    #[yagclif("omit")]
    state: T,
}

fn main() {
    let (server, rest) =
        yagclif::parse_from::<Server<Vec<u8>>, _>(["-q", "-p", "80", "left"]).unwrap();
    assert!(server.logging.quiet);
    assert_eq!(server.port, 80);
    assert!(server.state.is_empty());
    assert_eq!(rest, vec!["left".to_owned()]);
}
