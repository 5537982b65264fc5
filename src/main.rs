use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar_arm_kinematics::kinematic_traits::{Joints, Kinematics, P_END};
use planar_arm_kinematics::kinematics_impl::PlanarArmKinematics;
use planar_arm_kinematics::parameters::planar_arm::LinkLengths;
use planar_arm_kinematics::utils::{dump_joints, dump_pose, is_valid};

/// Forward and inverse kinematics of the planar three-link arm.
#[derive(Parser, Debug)]
#[command(name = "planar-arm", version, about)]
struct Cli {
    /// YAML file with the link lengths (planar_arm_link_lengths section).
    /// The built-in manipulator is used if not given.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Angles are given in degrees rather than radians
    #[arg(short, long, global = true)]
    degrees: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print positions of the elbow, the wrist and the end effector
    Forward {
        #[arg(allow_negative_numbers = true)]
        shoulder: f64,
        #[arg(allow_negative_numbers = true)]
        elbow: f64,
        #[arg(allow_negative_numbers = true)]
        wrist: f64,
    },
    /// Print joint angles that bring the end effector to (x, y) with the palm at
    /// angle alpha (clockwise) to the horizontal
    Inverse {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        alpha: f64,
    },
    /// Print the link lengths in use
    ShowConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lengths = match &cli.config {
        Some(path) => LinkLengths::from_yaml_file(path)
            .with_context(|| format!("Failed to read link lengths from {}", path.display()))?,
        None => LinkLengths::manipulator(),
    };
    let robot = PlanarArmKinematics::new(lengths);
    let to_radians = |angle: f64| if cli.degrees { angle.to_radians() } else { angle };

    match cli.command {
        Command::Forward { shoulder, elbow, wrist } => {
            let joints: Joints = [to_radians(shoulder), to_radians(elbow), to_radians(wrist)];
            dump_pose(&robot.forward(&joints));
            if let Some(singularity) = robot.kinematic_singularity(&joints) {
                println!("Singularity: {:?}", singularity);
            }
        }
        Command::Inverse { x, y, alpha } => {
            let joints = robot.inverse(x, y, to_radians(alpha));
            if !is_valid(&joints) {
                println!(
                    "Unreachable: the wrist must be between {} and {} from the shoulder",
                    lengths.min_reach(), lengths.max_reach()
                );
                return Ok(());
            }
            println!("Joints (degrees):");
            dump_joints(&joints);
            let end = robot.forward(&joints)[P_END];
            println!("End effector check: ({:.5}, {:.5})", end.x, end.y);
        }
        Command::ShowConfig => {
            print!("{}", lengths.to_yaml());
        }
    }
    Ok(())
}
