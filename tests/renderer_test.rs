use examplegen::error::Error;
use examplegen::renderer::{MiniJinjaRenderer, TemplateRenderer};

fn brand_context() -> serde_json::Value {
    serde_json::json!({
        "Prefix": "aap",
        "ProviderSource": "tfbrew/aap",
    })
}

#[test]
fn test_render_substitutes_placeholders() {
    let engine = MiniJinjaRenderer::new();

    let result = engine
        .render("provider \"{{ Prefix }}\" { source = \"{{ ProviderSource }}\" }", &brand_context())
        .unwrap();
    assert_eq!(result, "provider \"aap\" { source = \"tfbrew/aap\" }");
}

#[test]
fn test_render_without_placeholders_passes_text_through() {
    let engine = MiniJinjaRenderer::new();

    let result = engine.render("terraform import aap_inventory.example 42", &brand_context()).unwrap();
    assert_eq!(result, "terraform import aap_inventory.example 42");
}

#[test]
fn test_render_keeps_trailing_newline() {
    let engine = MiniJinjaRenderer::new();

    let result = engine
        .render("terraform import {{ Prefix }}_inventory.example 42\n", &brand_context())
        .unwrap();
    assert_eq!(result, "terraform import aap_inventory.example 42\n");
}

#[test]
fn test_unreferenced_context_keys_are_permitted() {
    let engine = MiniJinjaRenderer::new();

    let result = engine.render("prefix only: {{ Prefix }}", &brand_context()).unwrap();
    assert_eq!(result, "prefix only: aap");
}

#[test]
fn test_undefined_placeholder_is_an_execute_error() {
    let engine = MiniJinjaRenderer::new();

    let err = engine.render("value: {{ Unknown }}", &brand_context()).unwrap_err();
    assert!(matches!(err, Error::ExecuteTemplate(_)));
    assert!(err.to_string().starts_with("Error executing template:"));
}

#[test]
fn test_malformed_syntax_is_a_parse_error() {
    let engine = MiniJinjaRenderer::new();

    let err = engine.render("provider \"{{ Prefix \"", &brand_context()).unwrap_err();
    assert!(matches!(err, Error::ParseTemplate(_)));
    assert!(err.to_string().starts_with("Error parsing template:"));
}
