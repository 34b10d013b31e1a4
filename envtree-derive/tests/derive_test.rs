use envtree::{EnvStruct, EnvValue, MapSource, Parser, TargetKind};

#[derive(Default, EnvStruct)]
struct Labeled<T: EnvValue + Default> {
    #[env("VALUE")]
    value: T,
    r#type: String,
}

#[derive(Default, EnvStruct)]
#[env(prefix = "GEN")]
struct Holder {
    #[env("PORT")]
    port: Labeled<u16>,
    #[env("PEERS")]
    peers: Labeled<Vec<String>>,
}

fn parser() -> Parser {
    Parser::builder()
        .source(
            MapSource::new()
                .with("GEN_PORT_VALUE", "8080")
                .with("GEN_PORT_TYPE", "tcp")
                .with("GEN_PEERS_VALUE", "a,b"),
        )
        .build()
}

#[test]
fn test_generic_struct() {
    let holder = Holder::from_parser(&parser()).unwrap();
    assert_eq!(holder.port.value, 8080);
    assert_eq!(holder.port.r#type, "tcp");
    assert_eq!(holder.peers.value, ["a", "b"]);
    assert_eq!(holder.peers.r#type, "");
}

#[test]
fn test_derived_kind_and_prefix() {
    assert_eq!(<Holder as EnvValue>::KIND, TargetKind::Structure);
    assert_eq!(Holder::PREFIX, "GEN");
    assert_eq!(<Labeled<u8> as EnvStruct>::PREFIX, "");
}

#[test]
fn test_parse_new_starts_from_default() {
    let port = <Labeled<u16> as EnvValue>::parse_new(&parser(), "", "", "GEN.PORT").unwrap();
    assert_eq!(port.value, 8080);
    assert_eq!(port.r#type, "tcp");
}
