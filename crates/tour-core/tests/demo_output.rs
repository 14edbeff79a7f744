use tour_core::{run_demo, Config, FixedRandom, Random, SeededRandom};

const FIXED_LINES: [&str; 6] = [
    "Structured binding: 10, 20, 30",
    "Constexpr lambda: 25",
    "Fold sum: 10.7",
    "Processed int: 20",
    "Processed string: Hello World",
    "Inline variable: 3.1415926535",
];

fn run_with(random: &mut dyn Random) -> String {
    let mut out = Vec::new();
    run_demo(&Config::new(), random, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn without_roll(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| !line.starts_with("If-initializer"))
        .collect()
}

#[test]
fn low_roll_prints_six_lines() {
    for roll in 0..=5 {
        let output = run_with(&mut FixedRandom::new(roll));
        assert_eq!(output, FIXED_LINES.join("\n") + "\n");
    }
}

#[test]
fn high_roll_prints_seven_lines() {
    for roll in 6..=9 {
        let output = run_with(&mut FixedRandom::new(roll));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], FIXED_LINES[0]);
        assert_eq!(lines[1], format!("If-initializer: {roll} > 5"));
        assert_eq!(&lines[2..], &FIXED_LINES[1..]);
    }
}

#[test]
fn same_seed_same_output() {
    let first = run_with(&mut SeededRandom::from_seed(2024));
    let second = run_with(&mut SeededRandom::from_seed(2024));
    assert_eq!(first, second);
}

#[test]
fn only_the_roll_varies_between_runs() {
    for seed in 0..16 {
        let output = run_with(&mut SeededRandom::from_seed(seed));
        assert_eq!(without_roll(&output), FIXED_LINES);
        let rolls = output.lines().filter(|line| line.starts_with("If-initializer"));
        assert!(rolls.count() <= 1);
    }
}
