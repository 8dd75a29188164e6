use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use seabattle::{
    FieldBuilder, GameController, GameRules, RandomPlayer, SmartPlayer,
};

fn play_game(seed1: u64, seed2: u64) -> anyhow::Result<(bool, u32)> {
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let rules = GameRules::default();

    let field1 = FieldBuilder::new(rules).generate_random_field(&mut rng1)?;
    let field2 = FieldBuilder::new(rules).generate_random_field(&mut rng2)?;

    let mut controller = GameController::new(
        Box::new(SmartPlayer::new(field1)),
        Box::new(RandomPlayer::new(field2)),
    )?;

    let mut shots = 0u32;
    while !controller.game_finished() {
        let rng = if controller.first_player_turns() {
            &mut rng1
        } else {
            &mut rng2
        };
        let target = controller.current_player_mut().next_target(rng);
        if controller.shoot(target).is_some() {
            shots += 1;
        }
    }

    let smart_won = controller.second_player().self_field().survived_ships().total() == 0;
    Ok((smart_won, shots))
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed1> <seed2> [games]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let games: u64 = if args.len() == 4 { args[3].parse()? } else { 1 };

    let mut smart_wins = 0u64;
    let mut total_shots = 0u64;
    for game in 0..games {
        let (smart_won, shots) =
            play_game(seed1.wrapping_add(game), seed2.wrapping_add(game))?;
        if smart_won {
            smart_wins += 1;
        }
        total_shots += u64::from(shots);
    }

    let result = json!({
        "games": games,
        "smart_wins": smart_wins,
        "random_wins": games - smart_wins,
        "average_shots": total_shots as f64 / games as f64,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
