//! Behaviour-driven tests covering locale resolution semantics.

use std::cell::RefCell;
use std::str::FromStr;

use lexicon::{Catalog, LocaleSelection, LocaleSource, normalise_locale, resolve_localizer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

mod support;
use support::StepText;

const FALLBACK: &str = "en";

#[derive(Default)]
struct LocaleWorld {
    explicit: RefCell<Option<String>>,
    environment: RefCell<Option<String>>,
    configuration: RefCell<Option<String>>,
    resolution: RefCell<Option<LocaleSelection>>,
}

#[fixture]
fn world() -> LocaleWorld {
    LocaleWorld::default()
}

fn catalog() -> Catalog {
    [
        ("de.messages.greeting", "Hallo"),
        ("en.messages.greeting", "Hello"),
        ("pt.messages.greeting", "Olá"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value.to_owned()))
    .collect()
}

/// Locale source named in a step, e.g. `environment`.
#[derive(Debug)]
struct StepSource(LocaleSource);

impl FromStr for StepSource {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let source = match input.trim() {
            "explicit" => LocaleSource::ExplicitArgument,
            "environment" => LocaleSource::EnvironmentVariable,
            "configuration" => LocaleSource::Configuration,
            "fallback" => LocaleSource::Fallback,
            other => return Err(format!("no locale source called `{other}`")),
        };
        Ok(Self(source))
    }
}

fn resolved(world: &LocaleWorld) -> LocaleSelection {
    world
        .resolution
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("the locale should have been resolved"))
}

#[given("no explicit locale override is provided")]
fn no_explicit(world: &LocaleWorld) {
    world.explicit.borrow_mut().take();
}

#[given("the explicit locale override is {value}")]
fn set_explicit(world: &LocaleWorld, value: StepText) {
    world.explicit.borrow_mut().replace(value.into_inner());
}

#[given("LEXICON_LOCALE is not set")]
fn clear_environment(world: &LocaleWorld) {
    world.environment.borrow_mut().take();
}

#[given("LEXICON_LOCALE is {value}")]
fn set_environment(world: &LocaleWorld, value: StepText) {
    world.environment.borrow_mut().replace(value.into_inner());
}

#[given("no configuration locale is provided")]
fn clear_configuration(world: &LocaleWorld) {
    world.configuration.borrow_mut().take();
}

#[given("the configuration locale is {value}")]
fn set_configuration(world: &LocaleWorld, value: StepText) {
    world.configuration.borrow_mut().replace(value.into_inner());
}

#[when("the locale is resolved")]
fn resolve_locale(world: &LocaleWorld) {
    let explicit = world.explicit.borrow().clone();
    let environment = world.environment.borrow().clone();
    let configuration = world.configuration.borrow().clone();

    let resolution = resolve_localizer(
        &catalog(),
        FALLBACK,
        explicit.as_deref(),
        environment,
        configuration.as_deref(),
    );
    world.resolution.borrow_mut().replace(resolution);
}

#[then("the locale source is {source}")]
fn assert_source(world: &LocaleWorld, source: StepSource) {
    let resolution = resolved(world);

    assert_eq!(resolution.source(), source.0);
}

#[then("the resolved locale is {value}")]
fn assert_locale(world: &LocaleWorld, value: StepText) {
    let resolution = resolved(world);

    assert_eq!(Some(resolution.locale()), normalise_locale(Some(value.as_ref())));
    assert_eq!(resolution.localizer().fallback_locale(), FALLBACK);
}

#[then("the fallback locale is used")]
fn assert_fallback_used(world: &LocaleWorld) {
    let resolution = resolved(world);

    assert!(resolution.used_fallback());
    assert_eq!(resolution.locale(), FALLBACK);
}

#[then("the fallback locale is not used")]
fn assert_fallback_not_used(world: &LocaleWorld) {
    let resolution = resolved(world);

    assert!(!resolution.used_fallback());
}

#[scenario("tests/features/locale_resolution.feature", index = 0)]
fn scenario_fallback(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 1)]
fn scenario_environment(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 2)]
fn scenario_unsupported_candidates(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 3)]
fn scenario_explicit(world: LocaleWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_resolution.feature", index = 4)]
fn scenario_whitespace(world: LocaleWorld) {
    let _ = world;
}
