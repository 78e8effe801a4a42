use postag_core::context::{
    BasicContextGenerator, ContextError, ContextGenerator, GeneratorConfig, DEFAULT_SEPARATOR,
};
use postag_core::sample::TaggedSample;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn invariant_default_separator_is_single_space() {
    let generator = BasicContextGenerator::new();

    assert_eq!(generator.separator(), " ");
    assert_eq!(generator, BasicContextGenerator::default());
    assert_eq!(
        generator.context("cp_1 cp_2 cp_3").unwrap(),
        strings(&["cp_1", "cp_2", "cp_3"])
    );
}

#[test]
fn invariant_empty_input_is_one_empty_predicate() {
    let generator = BasicContextGenerator::new();

    assert_eq!(generator.context("").unwrap(), strings(&[""]));
}

#[test]
fn invariant_empty_fields_are_kept() {
    let generator = BasicContextGenerator::new();

    assert_eq!(generator.context("a  b").unwrap(), strings(&["a", "", "b"]));
    assert_eq!(generator.context(" a").unwrap(), strings(&["", "a"]));
    // Trailing fields survive too
    assert_eq!(generator.context("a b  ").unwrap(), strings(&["a", "b", "", ""]));
    assert_eq!(generator.context(" ").unwrap(), strings(&["", ""]));
}

#[test]
fn invariant_predicates_keep_order_and_duplicates() {
    let generator = BasicContextGenerator::new();

    assert_eq!(
        generator.context("w=the w=the p=DT").unwrap(),
        strings(&["w=the", "w=the", "p=DT"])
    );
}

#[test]
fn invariant_separator_is_literal() {
    // Regex metacharacters carry no special meaning
    let generator = BasicContextGenerator::with_separator(".").unwrap();
    assert_eq!(generator.context("a.b.c").unwrap(), strings(&["a", "b", "c"]));

    let generator = BasicContextGenerator::with_separator("||").unwrap();
    assert_eq!(
        generator.context("pre=un||suf=ed|x").unwrap(),
        strings(&["pre=un", "suf=ed|x"])
    );
}

#[test]
fn invariant_empty_separator_is_rejected() {
    assert_eq!(
        BasicContextGenerator::with_separator(""),
        Err(ContextError::EmptySeparator)
    );

    let config = GeneratorConfig {
        separator: String::new(),
    };
    assert_eq!(
        BasicContextGenerator::from_config(&config),
        Err(ContextError::EmptySeparator)
    );
}

#[test]
fn invariant_owned_and_byte_inputs() {
    let generator = BasicContextGenerator::new();
    let owned = String::from("cp_1 cp_2");

    assert_eq!(generator.context(&owned).unwrap(), strings(&["cp_1", "cp_2"]));
    assert_eq!(
        generator.context("cp_1 cp_2".as_bytes()).unwrap(),
        strings(&["cp_1", "cp_2"])
    );
}

#[test]
fn invariant_non_utf8_bytes_are_type_mismatch() {
    let generator = BasicContextGenerator::new();
    let invalid: &[u8] = &[0, 159, 146, 150];

    let result = generator.context(invalid);

    assert!(matches!(result, Err(ContextError::TypeMismatch { .. })));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Type mismatch: expected UTF-8 string"
    );
}

#[test]
fn invariant_config_defaults_fill_missing_fields() {
    assert_eq!(GeneratorConfig::default().separator, DEFAULT_SEPARATOR);
    assert_eq!(GeneratorConfig::from_json("{}").unwrap(), GeneratorConfig::default());

    let config = GeneratorConfig::from_json(r#"{"separator": "|"}"#).unwrap();
    let generator = BasicContextGenerator::from_config(&config).unwrap();
    assert_eq!(generator.context("a|b").unwrap(), strings(&["a", "b"]));

    assert!(GeneratorConfig::from_json(r#"{"separator": 3}"#).is_err());
}

/// A generator that only understands tagged samples, to show the contract is
/// not tied to strings.
struct WordTagGenerator;

impl ContextGenerator<TaggedSample> for WordTagGenerator {
    fn context(&self, input: &TaggedSample) -> Result<Vec<String>, ContextError> {
        Ok(input
            .pairs()
            .map(|(token, _)| format!("w={token}"))
            .chain(input.tags().iter().map(|tag| format!("t={tag}")))
            .collect())
    }
}

fn collect_with<I: ?Sized, G: ContextGenerator<I>>(generator: G, input: &I) -> Vec<String> {
    generator.context(input).unwrap()
}

#[test]
fn invariant_contract_is_generic_over_input() {
    let sample = TaggedSample::parse("the_DT dog_NN").unwrap();

    assert_eq!(
        collect_with(&WordTagGenerator, &sample),
        strings(&["w=the", "w=dog", "t=DT", "t=NN"])
    );
    assert_eq!(
        collect_with(&BasicContextGenerator::new(), "a b"),
        strings(&["a", "b"])
    );
}
