use mockito::{Matcher, Mock, Server, ServerGuard};
use reqwest::blocking::Client;
use resep_pintar::pipeline::{PipelineState, ProgressReporter};
use resep_pintar::recipes::SpoonacularClient;
use resep_pintar::translators::DeepLTranslator;
use resep_pintar::{
    build_pipeline, AppConfig, Pipeline, PipelineOptions, ResepError, SearchOutcome,
    SilentReporter,
};
use serde_json::json;

fn config_for(server: &Server, translate_steps: bool) -> AppConfig {
    AppConfig::from_toml(&format!(
        r#"
        [spoonacular]
        api_key = "spoon-key"
        base_url = "{url}"

        [translation]
        provider = "deepl"
        api_key = "deepl-key"
        base_url = "{url}"
        translate_steps = {translate_steps}
        "#,
        url = server.url(),
        translate_steps = translate_steps
    ))
    .unwrap()
}

fn mock_query_translation(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/v2/translate")
        .match_header("authorization", "DeepL-Auth-Key deepl-key")
        .match_body(Matcher::PartialJson(json!({
            "text": ["daging sapi, bawang putih"],
            "source_lang": "ID"
        })))
        .with_status(200)
        .with_body(r#"{"translations": [{"text": "beef, garlic"}]}"#)
        .create()
}

fn mock_search(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ingredients".into(), "beef, garlic".into()),
            Matcher::UrlEncoded("number".into(), "5".into()),
            Matcher::UrlEncoded("ranking".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn mock_detail(server: &mut ServerGuard, id: u64, status: usize, body: &str) -> Mock {
    server
        .mock("GET", format!("/recipes/{}/information", id).as_str())
        .match_query(Matcher::UrlEncoded("includeNutrition".into(), "false".into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn mock_batch(server: &mut ServerGuard, english: &[&str], indonesian: &[&str]) -> Mock {
    let translations: Vec<_> = indonesian.iter().map(|t| json!({ "text": t })).collect();
    server
        .mock("POST", "/v2/translate")
        .match_body(Matcher::PartialJson(json!({
            "text": english,
            "source_lang": "EN",
            "target_lang": "ID"
        })))
        .with_status(200)
        .with_body(json!({ "translations": translations }).to_string())
        .create()
}

const STIR_FRY: &str = r#"{
    "id": 101,
    "title": "Garlic Beef Stir Fry",
    "sourceUrl": "https://example.com/stir-fry",
    "extendedIngredients": [{"original": "1 lb beef"}, {"original": "3 cloves garlic"}],
    "analyzedInstructions": [{"name": "", "steps": [
        {"number": 1, "step": "Slice the beef."},
        {"number": 2, "step": "Fry with garlic."}
    ]}]
}"#;

const GARLIC_RICE: &str = r#"{
    "id": 103,
    "title": "Garlic Rice",
    "sourceUrl": null,
    "extendedIngredients": [{"original": "2 cups rice"}],
    "analyzedInstructions": []
}"#;

#[test]
fn test_indonesian_query_end_to_end() {
    let mut server = Server::new();
    let query_mock = mock_query_translation(&mut server);
    let search_mock = mock_search(&mut server, r#"[{"id": 101}, {"id": 102}, {"id": 103}]"#);
    let stir_fry = mock_detail(&mut server, 101, 200, STIR_FRY);
    let broken = mock_detail(&mut server, 102, 500, r#"{"message": "boom"}"#);
    let rice = mock_detail(&mut server, 103, 200, GARLIC_RICE);
    let stir_fry_batch = mock_batch(
        &mut server,
        &[
            "Garlic Beef Stir Fry",
            "1 lb beef",
            "3 cloves garlic",
            "Slice the beef.",
            "Fry with garlic.",
        ],
        &[
            "Tumis Daging Bawang Putih",
            "1 pon daging sapi",
            "3 siung bawang putih",
            "Iris daging sapi.",
            "Goreng dengan bawang putih.",
        ],
    );
    let rice_batch = mock_batch(
        &mut server,
        &["Garlic Rice", "2 cups rice"],
        &["Nasi Bawang Putih", "2 cangkir nasi"],
    );

    let pipeline = build_pipeline(&config_for(&server, true)).unwrap();
    let outcome = pipeline
        .run("daging sapi, bawang putih", &mut SilentReporter)
        .unwrap();

    let recipes = match outcome {
        SearchOutcome::Found(recipes) => recipes,
        SearchOutcome::NoMatches => panic!("expected recipes"),
    };
    assert_eq!(recipes.len(), 2);

    assert_eq!(recipes[0].name(), "Tumis Daging Bawang Putih");
    assert_eq!(recipes[0].source_url(), "https://example.com/stir-fry");
    assert_eq!(
        recipes[0].ingredients(),
        ["1 pon daging sapi", "3 siung bawang putih"]
    );
    assert_eq!(
        recipes[0].steps(),
        ["Iris daging sapi.", "Goreng dengan bawang putih."]
    );

    assert_eq!(recipes[1].name(), "Nasi Bawang Putih");
    assert_eq!(
        recipes[1].source_url(),
        "https://spoonacular.com/recipes/garlic-rice-103"
    );
    assert_eq!(
        recipes[1].steps(),
        ["Langkah detail tidak tersedia, silakan cek URL sumber."]
    );

    for mock in [
        query_mock,
        search_mock,
        stir_fry,
        broken,
        rice,
        stir_fry_batch,
        rice_batch,
    ] {
        mock.assert();
    }
}

#[test]
fn test_untranslated_steps_when_disabled() {
    let mut server = Server::new();
    let _query = mock_query_translation(&mut server);
    let _search = mock_search(&mut server, r#"[{"id": 101}]"#);
    let _detail = mock_detail(&mut server, 101, 200, STIR_FRY);
    let batch = mock_batch(
        &mut server,
        &["Garlic Beef Stir Fry", "1 lb beef", "3 cloves garlic"],
        &["Tumis Daging Bawang Putih", "1 pon daging sapi", "3 siung bawang putih"],
    );

    let pipeline = build_pipeline(&config_for(&server, false)).unwrap();
    let outcome = pipeline
        .run("daging sapi, bawang putih", &mut SilentReporter)
        .unwrap();

    match outcome {
        SearchOutcome::Found(recipes) => {
            assert_eq!(recipes[0].name(), "Tumis Daging Bawang Putih");
            assert_eq!(recipes[0].steps(), ["Slice the beef.", "Fry with garlic."]);
        }
        SearchOutcome::NoMatches => panic!("expected recipes"),
    }
    batch.assert();
}

#[test]
fn test_translation_quota_stops_before_search() {
    let mut server = Server::new();
    let translate = server
        .mock("POST", "/v2/translate")
        .with_status(456)
        .create();
    let search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let pipeline = build_pipeline(&config_for(&server, true)).unwrap();
    let result = pipeline.run("daging sapi, bawang putih", &mut SilentReporter);

    assert!(matches!(result, Err(ResepError::Translation(_))));
    translate.assert();
    search.assert();
}

#[test]
fn test_empty_query_issues_no_requests() {
    let mut server = Server::new();
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let pipeline = build_pipeline(&config_for(&server, true)).unwrap();
    let result = pipeline.run("", &mut SilentReporter);

    assert!(matches!(result, Err(ResepError::EmptyQuery)));
    any.assert();
    any_post.assert();
}

#[derive(Default)]
struct States(Vec<PipelineState>);

impl ProgressReporter for States {
    fn progress(&mut self, state: PipelineState, _percent: u8, _message: &str) {
        self.0.push(state);
    }
}

#[test]
fn test_no_matches_is_done_without_details() {
    let mut server = Server::new();
    let _query = mock_query_translation(&mut server);
    let _search = mock_search(&mut server, "[]");
    let details = server
        .mock("GET", Matcher::Regex(r"^/recipes/\d+/information".to_string()))
        .expect(0)
        .create();

    let pipeline = build_pipeline(&config_for(&server, true)).unwrap();
    let mut states = States::default();
    let outcome = pipeline
        .run("daging sapi, bawang putih", &mut states)
        .unwrap();

    assert_eq!(outcome, SearchOutcome::NoMatches);
    assert_eq!(states.0.last(), Some(&PipelineState::Done));
    details.assert();
}

/// Mocks expect exactly one hit each
#[test]
fn test_repeated_search_is_served_from_cache() {
    let mut server = Server::new();
    let query = mock_query_translation(&mut server);
    let search = mock_search(&mut server, r#"[{"id": 103}]"#);
    let detail = mock_detail(&mut server, 103, 200, GARLIC_RICE);
    let batch = mock_batch(
        &mut server,
        &["Garlic Rice", "2 cups rice"],
        &["Nasi Bawang Putih", "2 cangkir nasi"],
    );

    let pipeline = build_pipeline(&config_for(&server, true)).unwrap();
    let first = pipeline
        .run("daging sapi, bawang putih", &mut SilentReporter)
        .unwrap();
    let second = pipeline
        .run("daging sapi, bawang putih", &mut SilentReporter)
        .unwrap();

    assert_eq!(first, second);
    query.assert();
    search.assert();
    detail.assert();
    batch.assert();
}

#[test]
fn test_missing_spoonacular_key_is_reported() {
    let mut server = Server::new();
    let query = mock_query_translation(&mut server);
    let search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = Client::new();
    let pipeline = Pipeline::new(
        DeepLTranslator::with_base_url(client.clone(), Some("deepl-key".to_string()), server.url()),
        SpoonacularClient::with_base_url(client, None, server.url()),
        PipelineOptions::default(),
    );
    let mut states = States::default();
    let result = pipeline.run("daging sapi, bawang putih", &mut states);

    assert!(matches!(
        result,
        Err(ResepError::MissingCredentials("Spoonacular"))
    ));
    assert_eq!(states.0.last(), Some(&PipelineState::Failed));
    query.assert();
    search.assert();
}
