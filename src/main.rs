use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, ConsolePlayer, FieldBuilder, GameController, GameRules, Player,
    SmartPlayer, SmartestPlayer,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI on a randomly generated fleet.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Face the sampling AI instead of the single-simulation one")]
        smartest: bool,
    },
    /// Watch two AI players fight each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 300, help = "Pause between AI shots, in milliseconds")]
        delay_ms: u64,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, smartest } => {
            if let Some(seed) = seed {
                println!("Using fixed seed: {seed} (game will be reproducible)");
            }
            let mut rng = make_rng(seed);
            let rules = GameRules::default();

            println!("Ships are placed randomly. Sink the enemy fleet!");
            let your_field = FieldBuilder::new(rules).generate_random_field(&mut rng)?;
            let enemy_field = FieldBuilder::new(rules).generate_random_field(&mut rng)?;

            let you = Box::new(ConsolePlayer::new(your_field));
            let enemy: Box<dyn Player> = if smartest {
                Box::new(SmartestPlayer::new(enemy_field))
            } else {
                Box::new(SmartPlayer::new(enemy_field))
            };

            let mut controller = GameController::new(you, enemy)?;
            while !controller.game_finished() {
                let your_turn = controller.first_player_turns();
                if your_turn {
                    println!("\nYour board:");
                    print!("{}", ui::render_own_field(controller.first_player().self_field()));
                    println!("\nOpponent:");
                    print!("{}", ui::render_knowledge(controller.first_player().knowledge()));
                } else {
                    println!("Opponent is thinking...");
                    thread::sleep(Duration::from_millis(400));
                }

                let target = controller.current_player_mut().next_target(&mut rng);
                match controller.shoot(target) {
                    Some(result) => {
                        let shooter = if your_turn { "You" } else { "Opponent" };
                        println!(
                            "{} shot {} -> {:?}",
                            shooter,
                            ui::coord_to_string(target),
                            result.kind
                        );
                    }
                    None => println!("That cell is already resolved, pick another one"),
                }
            }

            let you_won = controller.second_player().self_field().survived_ships().total() == 0;
            println!("\nGame over!");
            println!("Enemy fleet:");
            print!("{}", ui::render_own_field(controller.second_player().self_field()));
            if you_won {
                println!("\nVictory! You have sunk all enemy ships.");
            } else {
                println!("\nDefeat. All your ships have been destroyed.");
            }
        }
        Commands::Watch { seed, delay_ms } => {
            println!("Starting AI vs AI game...");
            if let Some(seed) = seed {
                println!("Using fixed seed: {seed} (game will be reproducible)");
            }
            let mut rng = make_rng(seed);
            let rules = GameRules::default();

            let field1 = FieldBuilder::new(rules).generate_random_field(&mut rng)?;
            let field2 = FieldBuilder::new(rules).generate_random_field(&mut rng)?;
            let mut controller = GameController::new(
                Box::new(SmartPlayer::new(field1)),
                Box::new(SmartestPlayer::new(field2)),
            )?;

            let mut shots = 0u32;
            while !controller.game_finished() {
                let shooter = if controller.first_player_turns() {
                    "Player 1"
                } else {
                    "Player 2"
                };
                let target = controller.current_player_mut().next_target(&mut rng);
                if let Some(result) = controller.shoot(target) {
                    shots += 1;
                    println!(
                        "{} shoots {} -> {:?}",
                        shooter,
                        ui::coord_to_string(target),
                        result.kind
                    );
                }
                thread::sleep(Duration::from_millis(delay_ms));
            }

            let first_won = controller.second_player().self_field().survived_ships().total() == 0;
            println!(
                "\n{} wins after {} shots",
                if first_won { "Player 1" } else { "Player 2" },
                shots
            );
            println!("\nPlayer 1 fleet:");
            print!("{}", ui::render_own_field(controller.first_player().self_field()));
            println!("\nPlayer 2 fleet:");
            print!("{}", ui::render_own_field(controller.second_player().self_field()));
        }
    }
    Ok(())
}
