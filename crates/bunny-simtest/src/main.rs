//! Bunny Headless Simulation Harness
//!
//! Drives the engine through scripted and randomized care sessions on a
//! manual clock. Runs entirely in-process: no server, no real time.
//!
//! Usage:
//!   cargo run -p bunny-simtest
//!   cargo run -p bunny-simtest -- --verbose
//!   cargo run -p bunny-simtest -- --seed 7

use bunny_logic::actions::{pellet_mess, pellet_satiation, Action, Food, PlayKind};
use bunny_logic::clock::ManualClock;
use bunny_logic::engine::{BunnyEngine, Snapshot};
use bunny_logic::stats::Stats;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 42;
const RANDOM_WALK_STEPS: usize = 10_000;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn fresh() -> (BunnyEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    (BunnyEngine::with_clock(clock.clone()), clock)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    println!("=== Bunny Simulation Harness (seed {}) ===\n", seed);

    let mut results = Vec::new();

    // 1. Care actions from defaults
    results.extend(validate_actions(verbose));

    // 2. Lazy decay and grace period
    results.extend(validate_decay(verbose));

    // 3. Pellet formulas
    results.extend(validate_pellets(verbose));

    // 4. Perfect streaks and the easter bunny
    results.extend(validate_perfect_tracking(verbose));

    // 5. Randomized care session
    results.extend(validate_random_walk(seed, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Actions ──────────────────────────────────────────────────────────

fn validate_actions(verbose: bool) -> Vec<TestResult> {
    println!("--- Care Actions ---");
    let mut results = Vec::new();

    let (mut bunny, _) = fresh();
    let start = bunny.status();
    results.push(TestResult::check(
        "defaults",
        start.stats() == Stats::INITIAL && start.overall_health == 68.0 && !start.easter_bunny,
        format!("{:?}", start.stats()),
    ));

    let snap = bunny.feed(Food::Carrot);
    results.push(TestResult::check(
        "carrot",
        snap.hunger == 22.0 && snap.happiness == 76.0 && snap.energy == 75.0 && snap.cleanliness == 80.0,
        format!("hunger {} happiness {} energy {}", snap.hunger, snap.happiness, snap.energy),
    ));

    let snap = bunny.play(PlayKind::Toy);
    results.push(TestResult::check(
        "toy",
        snap.happiness == 92.0 && snap.energy == 67.0 && snap.cleanliness == 78.0,
        format!("happiness {} energy {} cleanliness {}", snap.happiness, snap.energy, snap.cleanliness),
    ));

    let snap = bunny.clean();
    results.push(TestResult::check(
        "clean",
        snap.cleanliness == 100.0 && snap.happiness == 96.0,
        format!("cleanliness {} happiness {}", snap.cleanliness, snap.happiness),
    ));

    let snap = bunny.reset();
    results.push(TestResult::check(
        "reset",
        snap.stats() == Stats::INITIAL && bunny.perfect_count() == 0,
        format!("{:?}", snap.stats()),
    ));

    match serde_json::to_value(snap) {
        Ok(json) => {
            let keys = ["hunger", "happiness", "cleanliness", "energy", "overallHealth", "easterBunny"];
            let missing: Vec<_> = keys.iter().filter(|k| json.get(**k).is_none()).collect();
            results.push(TestResult::check(
                "snapshot_json_shape",
                missing.is_empty(),
                if missing.is_empty() {
                    json.to_string()
                } else {
                    format!("missing keys {:?}", missing)
                },
            ));
        }
        Err(e) => results.push(TestResult::check(
            "snapshot_json_shape",
            false,
            format!("serialize error: {}", e),
        )),
    }

    if verbose {
        println!("  {} action checks", results.len());
    }
    results
}

// ── 2. Decay ────────────────────────────────────────────────────────────

fn validate_decay(verbose: bool) -> Vec<TestResult> {
    println!("--- Decay ---");
    let mut results = Vec::new();

    let (mut bunny, clock) = fresh();
    clock.advance(9.9);
    let snap = bunny.status();
    results.push(TestResult::check(
        "grace_period_debounces",
        snap.stats() == Stats::INITIAL,
        format!("after 9.9s hunger {}", snap.hunger),
    ));

    let mut prev = bunny.status();
    let mut monotonic = true;
    for minute in 1..=30 {
        clock.advance(60.0);
        let next = bunny.status();
        let ok = next.hunger >= prev.hunger
            && next.happiness <= prev.happiness
            && next.cleanliness <= prev.cleanliness
            && next.energy >= prev.energy;
        if !ok {
            monotonic = false;
        }
        if verbose && minute % 10 == 0 {
            println!(
                "  t+{:>2}m hunger {:>5.1} happiness {:>5.1} cleanliness {:>5.1} energy {:>5.1} health {:>5.1}",
                minute, next.hunger, next.happiness, next.cleanliness, next.energy, next.overall_health
            );
        }
        prev = next;
    }
    results.push(TestResult::check(
        "decay_directions",
        monotonic,
        "hunger/energy rise, happiness/cleanliness fall over 30 minutes",
    ));

    clock.advance(7.0 * 24.0 * 3600.0);
    let snap = bunny.status();
    results.push(TestResult::check(
        "decay_saturates",
        snap.stats().in_bounds() && snap.hunger == 100.0 && snap.happiness == 0.0,
        format!("after a week: {:?}", snap.stats()),
    ));

    results
}

// ── 3. Pellets ──────────────────────────────────────────────────────────

fn validate_pellets(verbose: bool) -> Vec<TestResult> {
    println!("--- Pellets ---");
    let mut results = Vec::new();

    let capped = (1..=1000).all(|n| pellet_satiation(n) <= 10.0);
    results.push(TestResult::check(
        "satiation_capped",
        capped,
        "at most 10 hunger relief for 1..=1000 pellets",
    ));

    let increasing = (1..1000).all(|n| pellet_mess(n + 1) > pellet_mess(n));
    results.push(TestResult::check(
        "mess_increasing",
        increasing,
        format!("mess(5)={} mess(6)={} mess(100)={}", pellet_mess(5), pellet_mess(6), pellet_mess(100)),
    ));

    if verbose {
        for n in [1, 3, 5, 6, 10] {
            println!(
                "  {:>2} pellets: -{:>4.1} hunger, -{:>4.1} cleanliness",
                n,
                pellet_satiation(n),
                pellet_mess(n)
            );
        }
    }

    let (mut bunny, _) = fresh();
    let snap = bunny.feed(Food::Pellet { count: 100 });
    results.push(TestResult::check(
        "feed_hundred_pellets",
        snap.hunger == 30.0 && snap.cleanliness == 0.0,
        format!("hunger {} cleanliness {}", snap.hunger, snap.cleanliness),
    ));

    results
}

// ── 4. Perfect streaks ──────────────────────────────────────────────────

fn pamper(bunny: &mut BunnyEngine<ManualClock>) -> Snapshot {
    let mut snap = bunny.status();
    for _ in 0..100 {
        if snap.stats().is_perfect() {
            break;
        }
        snap = if snap.hunger > 0.1 {
            bunny.feed(Food::Carrot)
        } else if snap.cleanliness < 99.9 {
            bunny.clean()
        } else {
            bunny.play(PlayKind::Pat)
        };
    }
    snap
}

fn validate_perfect_tracking(verbose: bool) -> Vec<TestResult> {
    println!("--- Perfect Streaks ---");
    let mut results = Vec::new();

    let (mut bunny, _) = fresh();
    let snap = pamper(&mut bunny);
    results.push(TestResult::check(
        "reach_perfect",
        snap.stats().is_perfect() && bunny.perfect_count() == 1,
        format!("{:?}", snap.stats()),
    ));

    for _ in 0..10 {
        bunny.status();
    }
    results.push(TestResult::check(
        "sustained_perfect_counts_once",
        bunny.perfect_count() == 1 && !bunny.status().easter_bunny,
        format!("count {}", bunny.perfect_count()),
    ));

    let broken = bunny.play(PlayKind::Toy);
    let snap = pamper(&mut bunny);
    results.push(TestResult::check(
        "second_streak_reveals_easter_bunny",
        !broken.stats().is_perfect() && snap.easter_bunny && bunny.perfect_count() == 2,
        format!("count {} easter {}", bunny.perfect_count(), snap.easter_bunny),
    ));

    bunny.play(PlayKind::Toy);
    let snap = pamper(&mut bunny);
    results.push(TestResult::check(
        "third_streak_hides_easter_bunny",
        !snap.easter_bunny && bunny.perfect_count() == 3,
        format!("count {}", bunny.perfect_count()),
    ));

    if verbose {
        println!("  perfect streaks observed: {}", bunny.perfect_count());
    }
    results
}

// ── 5. Random walk ──────────────────────────────────────────────────────

fn random_action(rng: &mut StdRng) -> Action {
    match rng.gen_range(0..6) {
        0 => Action::Feed(Food::Carrot),
        1 => Action::Feed(Food::Pellet {
            count: rng.gen_range(-5..=50),
        }),
        2 => Action::Play(PlayKind::Pat),
        3 => Action::Play(PlayKind::Toy),
        4 => Action::Clean,
        _ => Action::Reset,
    }
}

fn validate_random_walk(seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Random Walk ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let (mut bunny, clock) = fresh();
    let mut violations = 0usize;
    let mut min_health = f64::MAX;
    let mut max_health = f64::MIN;

    for _ in 0..RANDOM_WALK_STEPS {
        if rng.gen_bool(0.3) {
            clock.advance(rng.gen_range(0.0..3600.0));
        }
        let snap = if rng.gen_bool(0.2) {
            bunny.status()
        } else {
            bunny.apply(random_action(&mut rng))
        };
        if !snap.stats().in_bounds() {
            violations += 1;
        }
        min_health = min_health.min(snap.overall_health);
        max_health = max_health.max(snap.overall_health);
    }

    results.push(TestResult::check(
        "stats_clamped",
        violations == 0,
        format!("{} out-of-range snapshots in {} steps", violations, RANDOM_WALK_STEPS),
    ));
    results.push(TestResult::check(
        "health_in_range",
        (0.0..=100.0).contains(&min_health) && (0.0..=100.0).contains(&max_health),
        format!("health ranged {:.1}..{:.1}", min_health, max_health),
    ));

    let snap = bunny.reset();
    results.push(TestResult::check(
        "reset_after_walk",
        snap.stats() == Stats::INITIAL && !snap.easter_bunny && bunny.perfect_count() == 0,
        format!("{:?}", snap.stats()),
    ));

    if verbose {
        println!("  {} steps, seed {}", RANDOM_WALK_STEPS, seed);
    }
    results
}
