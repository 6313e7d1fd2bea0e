// Integration tests for hangman
// Whole sessions are driven through the line console with scripted input

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::Cursor;
use std::path::Path;

fn words_dir(english: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("words_eng.txt"), english).unwrap();
    dir
}

/// Play a session and return (summary, everything printed).
fn play(dir: &Path, input: &str, seed: u64) -> (SessionSummary, String) {
    let source = WordSource::new(vec![dir.to_path_buf()]);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut interface = CliInterface::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let summary = game_loop(&mut interface, &source, &mut rng).unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (summary, output)
}

#[test]
fn test_win_by_whole_word_then_decline() {
    let dir = words_dir("test\n");
    let (summary, output) = play(dir.path(), "2\ntest\nno\n", 1);

    assert_eq!(
        summary,
        SessionSummary {
            language: Some(Language::English),
            rounds_played: 1,
            interrupted: false
        }
    );
    assert!(output.contains("Welcome to Hangman!"));
    assert!(output.contains("Playing in English!"));
    assert!(output.contains("The secret word has 4 letters"));
    assert!(output.contains("Excellent! You guessed the whole word 'test'!"));
    assert!(output.contains("Congratulations! You guessed the word!"));
    assert!(output.contains("Word: t e s t"));
    assert!(output.trim_end().ends_with("Thanks for playing! Goodbye!"));
}

#[test]
fn test_loss_reveals_secret() {
    let dir = words_dir("code\n");
    let (summary, output) = play(dir.path(), "2\na\nb\nf\ng\nh\ni\nj\nn\n", 3);

    assert_eq!(summary.rounds_played, 1);
    assert!(output.contains("Game over! You lost."));
    assert!(output.contains("The secret word was: code"));
    assert!(output.contains("Attempts left: 0"));
    assert!(output.contains("Wrong letters: a, b, f, g, h, i, j"));
}

#[test]
fn test_invalid_input_is_corrected_without_cost() {
    let dir = words_dir("code\n");
    // Bad menu choice, then empty, digits, wrong length, a wrong letter repeated
    let input = "7\n2\n\n42\nco\nx\nx\ncode\nmaybe\nn\n";
    let (summary, output) = play(dir.path(), input, 5);

    assert_eq!(summary.rounds_played, 1);
    assert!(output.contains("Please enter 1 for Russian or 2 for English."));
    assert!(output.contains("Please enter a letter or a word!"));
    assert!(output.contains("Please use letters only!"));
    assert!(output.contains("Enter either a single letter or a 4-letter word!"));
    assert!(output.contains("You already guessed the letter 'x'"));
    assert!(output.contains("Please answer 'yes' or 'no'."));
    // Only the first 'x' cost an attempt
    assert!(output.contains("Attempts left: 6"));
    assert!(!output.contains("Attempts left: 5"));
}

#[test]
fn test_multiple_rounds() {
    let dir = words_dir("rust\n");
    let (summary, output) = play(dir.path(), "2\nrust\nyes\nrust\nд\nrust\nn\n", 11);

    assert_eq!(summary.rounds_played, 3);
    assert!(!summary.interrupted);
    assert_eq!(output.matches("Congratulations!").count(), 3);
}

#[test]
fn test_end_of_input_interrupts_session() {
    let dir = words_dir("rust\n");
    let (summary, output) = play(dir.path(), "2\nz\n", 2);

    assert!(summary.interrupted);
    assert_eq!(summary.rounds_played, 1);
    assert!(output.contains("Game interrupted. Goodbye!"));
    assert!(!output.contains("Thanks for playing!"));
}

#[test]
fn test_interrupt_at_language_menu() {
    let dir = words_dir("rust\n");
    let (summary, output) = play(dir.path(), "", 2);

    assert!(summary.interrupted);
    assert_eq!(summary.rounds_played, 0);
    assert!(output.contains("Game interrupted. Goodbye!"));
}

#[test]
fn test_missing_file_falls_back_to_built_in_words() {
    let dir = tempfile::tempdir().unwrap();
    // None of these letters occur in the built-in English words
    let (summary, output) = play(dir.path(), "2\nb\nj\nk\nq\nw\nx\nz\nno\n", 8);

    assert_eq!(summary.rounds_played, 1);
    assert!(output.contains("File words_eng.txt not found. Using the built-in word list."));
    assert!(output.contains("Game over! You lost."));
    let built_in = ["programming", "computer", "development", "algorithm", "function"];
    assert!(
        built_in
            .iter()
            .any(|w| output.contains(&format!("The secret word was: {w}")))
    );
}

#[test]
fn test_russian_session_from_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("words_rus.txt"), "Кошка\nкот\n").unwrap();
    let (summary, output) = play(dir.path(), "1\nкошка\nнет\n", 4);

    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.language, Some(Language::Russian));
    assert!(output.contains("Играем на русском языке!"));
    assert!(output.contains("Загадано слово из 5 букв"));
    assert!(output.contains("Слово: к о ш к а"));
    assert!(output.contains("ПОЗДРАВЛЯЕМ! Вы угадали слово!"));
    assert!(!output.contains("Congratulations!"));
    assert!(output.trim_end().ends_with("Спасибо за игру! До свидания!"));
}

#[test]
fn test_interrupt_before_language_choice_is_bilingual() {
    let dir = words_dir("rust\n");
    let (summary, output) = play(dir.path(), "9\n", 2);

    assert_eq!(summary.language, None);
    assert!(output.contains("Пожалуйста, введите 1 для русского или 2 для английского языка."));
    assert!(output.contains("Please enter 1 for Russian or 2 for English."));
    assert!(output.contains("Игра прервана. До свидания!\nGame interrupted. Goodbye!"));
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let dir = words_dir("apple\nbanana\ncherry\ndamson\nelderberry\nfigs\n");
    let input = "2\nq\n";
    let (_, first) = play(dir.path(), input, 99);
    let (_, second) = play(dir.path(), input, 99);
    assert_eq!(first, second);
}

#[test]
fn test_word_list_filtering_end_to_end() {
    let dir = words_dir("ox\naaaa\nwell-known\nRUST\n");
    let list = WordSource::new(vec![dir.path().to_path_buf()]).load_words(Language::English);
    assert_eq!(list.words, vec!["rust"]);
    assert_eq!(
        load_wordbank_from_file(dir.path().join("words_eng.txt")).unwrap(),
        vec!["rust"]
    );
}
