// Theory scenarios across the public API
//
// These exercise the pitch model, catalogs, theory engine and position
// mapper together the way the rendering layer calls them.

use fretboard_wasm::fretboard::note_at_position;
use fretboard_wasm::models::interval::{self, INTERVALS};
use fretboard_wasm::models::pattern::{get_pattern, patterns_of_kind, scale_names};
use fretboard_wasm::theory::{
    get_chord_notes, get_expected_note_for_degree, get_interval, get_note_from_interval,
    get_roman_numeral, get_scale_notes, get_spelled_pattern_notes, spell,
};
use fretboard_wasm::{Key, KeyQuality, Note, PatternKind, TheoryError, Tonic, Tuning};

fn n(name: &str) -> Note {
    name.parse().unwrap()
}

#[test]
fn test_c_major_scale_scenario() {
    let key = Key::major(Tonic::C);
    let notes = get_scale_notes(&key, "major").unwrap();
    assert_eq!(notes, vec![n("C"), n("D"), n("E"), n("F"), n("G"), n("A"), n("B")]);
    assert_eq!(get_interval(&key, n("F"), None).token, "4");
}

#[test]
fn test_c_major_triad_scenario() {
    let key = Key::major(Tonic::C);
    assert_eq!(get_chord_notes(&key, "major").unwrap(), vec![n("C"), n("E"), n("G")]);
    assert_eq!(get_roman_numeral(1, true).unwrap(), "I");
}

#[test]
fn test_roman_numerals_on_major_key() {
    let numerals: Vec<String> = (1..=7).map(|d| get_roman_numeral(d, true).unwrap()).collect();
    assert_eq!(numerals, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
    assert_eq!(get_roman_numeral(0, true), Err(TheoryError::DegreeOutOfRange(0)));
    assert_eq!(get_roman_numeral(8, true), Err(TheoryError::DegreeOutOfRange(8)));
}

#[test]
fn test_high_e_string_third_fret() {
    let tuning = Tuning::parse(&["E", "B", "G", "D", "A", "E"]).unwrap();
    assert_eq!(note_at_position(&tuning, 0, 3).unwrap(), n("G"));
}

#[test]
fn test_invalid_tuning_entry_is_rejected() {
    assert_eq!(
        Tuning::parse(&["E", "B", "G", "D", "A", "Z"]),
        Err(TheoryError::InvalidNote("Z".to_string()))
    );
}

#[test]
fn test_every_scale_on_every_root() {
    for root in Note::all() {
        let key = Key::from_note(root, KeyQuality::Major);
        for name in scale_names() {
            let pattern = get_pattern(name, PatternKind::Scale).unwrap();
            let notes = get_scale_notes(&key, name).unwrap();
            assert_eq!(notes.len(), pattern.intervals.len());
            assert_eq!(notes[0], root);
            for (i, a) in notes.iter().enumerate() {
                assert!(!notes[i + 1..].contains(a), "{} on {} repeats {}", name, root, a);
            }
        }
    }
}

#[test]
fn test_interval_round_trip_for_every_token() {
    for tonic in Tonic::ALL {
        let key = Key::major(tonic);
        for entry in INTERVALS.iter() {
            let note = get_note_from_interval(&key, entry.token).unwrap();
            let back = get_interval(&key, note, None);
            assert_eq!(back.semitones, entry.semitones);
            if interval::CANONICAL_TOKENS.contains(&entry.token) {
                assert_eq!(back.token, entry.token);
            }
        }
    }
}

#[test]
fn test_pattern_context_labels_tritone() {
    let key = Key::major(Tonic::D);
    let tritone = n("G#");
    let lydian = get_pattern("lydian", PatternKind::Scale).unwrap();
    let blues = get_pattern("blues", PatternKind::Scale).unwrap();
    let chord = get_pattern("maj7#11", PatternKind::Chord).unwrap();

    assert_eq!(get_interval(&key, tritone, Some(&lydian)).token, "#4");
    assert_eq!(get_interval(&key, tritone, Some(&blues)).token, "b5");
    assert_eq!(get_interval(&key, tritone, Some(&chord)).token, "#11");
}

#[test]
fn test_spelling_follows_key_and_pattern() {
    let g = Key::major(Tonic::G);
    assert_eq!(spell(n("F#"), &g, PatternKind::Chord, "major").unwrap(), "F#");
    assert_eq!(spell(n("F#"), &g, PatternKind::Scale, "major").unwrap(), "F#");

    let f = Key::major(Tonic::F);
    assert_eq!(spell(n("A#"), &f, PatternKind::Scale, "major").unwrap(), "Bb");

    let c_sharp_minor = Key::minor(Tonic::Cs);
    let minor = get_pattern("harmonic_minor", PatternKind::Scale).unwrap();
    let names: Vec<String> = get_spelled_pattern_notes(&c_sharp_minor, &minor)
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, ["C#", "D#", "E", "F#", "G#", "A", "B#"]);
}

#[test]
fn test_no_repeated_letters_for_heptatonic_and_pentatonic_patterns() {
    for tonic in Tonic::ALL {
        for quality in [KeyQuality::Major, KeyQuality::Minor] {
            let key = Key::new(tonic, quality);
            for pattern in patterns_of_kind(PatternKind::Scale)
                .chain(patterns_of_kind(PatternKind::Chord))
                .filter(|p| p.has_distinct_degrees())
            {
                let spelled = get_spelled_pattern_notes(&key, pattern).unwrap();
                for (i, a) in spelled.iter().enumerate() {
                    assert!(
                        spelled[i + 1..].iter().all(|b| b.letter != a.letter),
                        "{} over {} repeats letter {}",
                        pattern.id,
                        tonic,
                        a.letter.as_str()
                    );
                }
            }
        }
    }
}

#[test]
fn test_expected_note_for_degree_ignores_pattern_accidentals() {
    let key = Key::major(Tonic::Bb);
    assert_eq!(get_expected_note_for_degree(&key, 4).unwrap(), n("Eb"));
    assert_eq!(get_expected_note_for_degree(&key, 7).unwrap(), n("A"));

    // The interval view spells b7 over Bb from degree 7 (A) lowered: Ab
    assert_eq!(spell(n("G#"), &key, PatternKind::Interval, "b7").unwrap(), "Ab");
}

#[test]
fn test_unknown_inputs_are_errors_not_defaults() {
    let key = Key::major(Tonic::C);
    assert!(matches!(
        get_scale_notes(&key, "ultralocrian"),
        Err(TheoryError::UnknownPattern { kind: PatternKind::Scale, .. })
    ));
    assert_eq!(
        get_note_from_interval(&key, "#7"),
        Err(TheoryError::UnknownInterval("#7".to_string()))
    );
    assert_eq!("Hb".parse::<Note>(), Err(TheoryError::InvalidNote("Hb".to_string())));
}

#[test]
fn test_repeated_calls_are_identical() {
    let key = Key::major(Tonic::Ab);
    for _ in 0..3 {
        assert_eq!(
            get_scale_notes(&key, "mixolydian").unwrap(),
            get_scale_notes(&key, "mixolydian").unwrap()
        );
        assert_eq!(get_chord_notes(&key, "13").unwrap(), get_chord_notes(&key, "13").unwrap());
    }
}
