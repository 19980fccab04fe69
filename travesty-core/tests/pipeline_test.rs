use std::sync::atomic::AtomicBool;

use rand::SeedableRng;
use rand::rngs::StdRng;

use travesty_core::text::paragraph::ParagraphPolicy;
use travesty_core::text::wrap::WRAP_WIDTH;
use travesty_core::{Granularity, Phase, Settings, TravestyError, travesty};

const SOURCE: &str = "It was a bright cold day in April. The clocks were striking thirteen. \
	Winston Smith slipped quickly through the glass doors. He didn't stop, and the wind \
	followed him in. The hallway smelt of boiled cabbage and old rag mats. At one end of it \
	a coloured poster had been tacked to the wall. It depicted simply an enormous face. \
	The face was that of a man of about forty-five. It's a face with a heavy black moustache. \
	Winston made for the stairs. It was no use trying the lift. Even at the best of times \
	it was seldom working. The flat was seven flights up. Winston was thirty-nine! \
	He went slowly, resting several times on the way. Was the poster watching him? \
	The caption beneath it ran: Big Brother is watching you.";

fn run(settings: &Settings, seed: u64) -> Result<travesty_core::Travesty, TravestyError> {
	let mut rng = StdRng::seed_from_u64(seed);
	travesty(SOURCE, settings, &mut rng, &AtomicBool::new(false))
}

#[test]
fn character_travesty_with_defaults() {
	let settings = Settings::default();
	let result = run(&settings, 1).unwrap();
	assert!(!result.interrupted);
	assert!(result.generated_units >= result.source_units);
	assert!(result.slices > 0);
	assert!(result.text.ends_with(['.', '?', '!']));
	assert!(result.text.starts_with(char::is_uppercase));
}

#[test]
fn token_travesty_reassembles_words() {
	let settings = Settings { granularity: Granularity::Token, depth: 2, ..Settings::default() };
	let result = run(&settings, 2).unwrap();
	assert!(result.text.ends_with(['.', '?', '!']));
	// punctuation is attached and clitics are fused back
	assert!(!result.text.contains(" ."));
	assert!(!result.text.contains(" ,"));
	assert!(!result.text.contains(" 't"));
	assert!(!result.text.contains(" 's"));
}

#[test]
fn half_size_output() {
	let settings = Settings { size_percent: 50, ..Settings::default() };
	let result = run(&settings, 3).unwrap();
	assert!(result.generated_units >= result.source_units / 2);
	assert!(result.generated_units < result.source_units);
}

#[test]
fn same_seed_same_travesty() {
	let settings = Settings { granularity: Granularity::Token, depth: 2, ..Settings::default() };
	assert_eq!(run(&settings, 42).unwrap(), run(&settings, 42).unwrap());
}

#[test]
fn interrupted_runs_still_produce_text() {
	let mut rng = StdRng::seed_from_u64(4);
	let result = travesty(SOURCE, &Settings::default(), &mut rng, &AtomicBool::new(true)).unwrap();
	assert!(result.interrupted);
	assert!(result.generated_units < result.source_units);
	assert!(result.text.ends_with('.') || result.text.ends_with('?') || result.text.ends_with('!'));
}

#[test]
fn formatted_paragraphs_fit_the_width() {
	let settings = Settings {
		format: true,
		paragraph_period: 3,
		paragraph_policy: ParagraphPolicy::Exact,
		..Settings::default()
	};
	let result = run(&settings, 5).unwrap();
	assert!(result.text.lines().all(|line| line.chars().count() <= WRAP_WIDTH));
	assert!(result.text.contains("\n\n"));
}

#[test]
fn empty_source_fails_in_scrub() {
	let mut rng = StdRng::seed_from_u64(0);
	let err = travesty("  \n", &Settings::default(), &mut rng, &AtomicBool::new(false)).unwrap_err();
	assert!(matches!(err, TravestyError::EmptyInput));
	assert_eq!(err.phase(), Phase::Scrub);
}

#[test]
fn short_source_is_too_sparse() {
	let mut rng = StdRng::seed_from_u64(0);
	let err = travesty("Too short.", &Settings::default(), &mut rng, &AtomicBool::new(false)).unwrap_err();
	assert!(err.is_model_too_sparse());
	assert_eq!(err.phase(), Phase::Train);
}

#[test]
fn source_without_sentence_starts_is_too_sparse() {
	let mut rng = StdRng::seed_from_u64(0);
	let source = "all lower case text. without any capital letter. at all, anywhere.";
	let settings = Settings { depth: 4, ..Settings::default() };
	let err = travesty(source, &settings, &mut rng, &AtomicBool::new(false)).unwrap_err();
	assert!(matches!(err, TravestyError::NoValidStart));
	assert_eq!(err.phase(), Phase::Generate);
}

#[test]
fn invalid_settings_fail_before_reading_the_source() {
	let mut rng = StdRng::seed_from_u64(0);
	let settings = Settings { depth: 0, ..Settings::default() };
	let err = travesty(SOURCE, &settings, &mut rng, &AtomicBool::new(false)).unwrap_err();
	assert_eq!(err.phase(), Phase::Configure);
}

#[test]
fn huge_depth_is_a_configuration_error() {
	let mut rng = StdRng::seed_from_u64(0);
	let settings = Settings { depth: usize::MAX, ..Settings::default() };
	let err = travesty("The cat sat. The cat ran.", &settings, &mut rng, &AtomicBool::new(false)).unwrap_err();
	assert!(matches!(err, TravestyError::InvalidConfig(_)));
	assert_eq!(err.phase(), Phase::Configure);
}

#[test]
fn character_output_never_doubles_the_final_mark() {
	let source = ". Ab cd. Ef gh\n";
	let settings = Settings { depth: 3, scrub: false, ..Settings::default() };
	for seed in 0..32 {
		let mut rng = StdRng::seed_from_u64(seed);
		let result = travesty(source, &settings, &mut rng, &AtomicBool::new(false)).unwrap();
		assert!(!result.text.contains(".."), "seed {seed}: {:?}", result.text);
		assert!(!result.text.contains("\n."), "seed {seed}: {:?}", result.text);
		assert!(result.text.ends_with('.'));
	}
}
