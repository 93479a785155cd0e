mod common;

use common::resolve_marked;
use lambda_stubs_core::TypeRef;
use lambda_stubs_java::SiteKind;

#[test]
fn declarator_without_initializer_gets_one() {
    let (source, target) = resolve_marked(
        "import java.util.function.Function;\nclass A { void m() { Function<String, Integer> f/*|*/; } }",
    );
    let target = target.expect("declarator should resolve");
    assert_eq!(target.site.kind, SiteKind::Initializer);
    assert_eq!(&source[..target.site.start], "import java.util.function.Function;\nclass A { void m() { Function<String, Integer> f");
    assert_eq!(target.signature.parameter_types(), &[TypeRef::raw("String")]);
    assert_eq!(target.signature.return_type(), &TypeRef::raw("Integer"));
    assert!(!target.signature.has_source_names());
}

#[test]
fn existing_initializer_is_replaced() {
    let (source, target) =
        resolve_marked("class A { Runnable task = nu/*|*/ll; }");
    let target = target.expect("field should resolve");
    assert_eq!(target.site.kind, SiteKind::Replace);
    assert_eq!(&source[target.site.start..target.site.end], "null");
    assert_eq!(target.signature.arity(), 0);
    assert!(target.signature.returns_void());
}

#[test]
fn last_declarator_before_cursor_wins() {
    let (source, target) = resolve_marked(
        "class A { void m() { Runnable a = null, b = null/*|*/; } }",
    );
    let target = target.expect("second declarator should resolve");
    let before = &source[..target.site.start];
    assert!(before.ends_with("b = "), "unexpected site prefix {:?}", before);
}

#[test]
fn argument_of_same_file_method_is_replaced() {
    let (source, target) = resolve_marked(
        "import java.util.function.BiFunction;\nclass A {\n  static void register(String name, BiFunction<String, Integer, Long> handler) {}\n  void m() { register(\"x\", han/*|*/dler); }\n}",
    );
    let target = target.expect("argument should resolve");
    assert_eq!(&source[target.site.start..target.site.end], "handler");
    assert_eq!(target.signature.arity(), 2);
    assert_eq!(target.site.expected_type, "BiFunction<String, Integer, Long>");
}

#[test]
fn empty_argument_list_inserts_at_cursor() {
    let (_, target) = resolve_marked(
        "class A {\n  void run(Runnable r) {}\n  void m() { run(/*|*/); }\n}",
    );
    let target = target.expect("empty argument list should resolve");
    assert_eq!(target.site.start, target.site.end);
    assert_eq!(target.site.kind, SiteKind::Replace);
}

#[test]
fn source_interface_supplies_parameter_names() {
    let (_, target) = resolve_marked(
        "interface Scorer { int score(String word, int bonus); }\nclass A { Scorer s/*|*/; }",
    );
    let signature = target.expect("source interface should resolve").signature;
    assert_eq!(
        signature.parameter_names(),
        Some(&["word".to_string(), "bonus".to_string()][..])
    );
    assert_eq!(signature.interface_name(), Some("Scorer"));
}

#[test]
fn non_functional_types_are_not_sites() {
    let (_, target) = resolve_marked("class A { void m() { String s/*|*/; } }");
    assert!(target.is_none());
}

#[test]
fn single_type_import_shadows_jdk_interface() {
    let (_, target) = resolve_marked(
        "import com.acme.Supplier;\nclass A { Supplier<String> s/*|*/; }",
    );
    assert!(target.is_none());
}

#[test]
fn jdk_interface_without_import_is_not_guessed() {
    let (_, target) = resolve_marked("class A { Supplier<String> s/*|*/; }");
    assert!(target.is_none());
}

#[test]
fn wildcard_import_makes_jdk_interface_visible() {
    let (_, target) = resolve_marked(
        "import java.util.function.*;\nclass A { Supplier<String> s/*|*/; }",
    );
    let signature = target.expect("imported Supplier should resolve").signature;
    assert_eq!(signature.interface_name(), Some("Supplier"));
    assert_eq!(signature.return_type(), &TypeRef::raw("String"));
}

#[test]
fn cursor_in_block_whitespace_is_not_a_site() {
    let (_, target) = resolve_marked("class A { void m() { /*|*/ } }");
    assert!(target.is_none());
}

#[test]
fn offset_past_end_is_an_error() {
    use lambda_stubs_core::SignatureResolver;
    let err = lambda_stubs_java::JavaResolver::new()
        .resolve("class A {}", 100)
        .unwrap_err();
    assert!(matches!(
        err,
        lambda_stubs_java::JavaError::OffsetOutOfRange { offset: 100, .. }
    ));
}
