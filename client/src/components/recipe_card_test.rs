use super::*;

#[test]
fn macro_text_drops_decimals() {
    assert_eq!(macro_text(41.6, "g"), "42g");
    assert_eq!(macro_text(540.0, ""), "540");
    assert_eq!(macro_text(f64::NAN, "g"), "0g");
}

#[test]
fn keyed_uses_positional_index() {
    let steps = vec!["Chop".to_owned(), "Chop".to_owned(), "Serve".to_owned()];
    let keys: Vec<_> = keyed(&steps).into_iter().map(|(i, _)| i).collect();
    assert_eq!(keys, vec![0, 1, 2]);
}
