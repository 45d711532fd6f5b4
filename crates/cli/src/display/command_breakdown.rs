use karate_runner_core::{ProjectDetail, RunCommand};

use super::formatter::describe_build_system;

pub fn print_command_breakdown(project: &ProjectDetail, command: &RunCommand) {
    println!("   🔧 Command breakdown:");
    println!("      • build system: {}", describe_build_system(project));
    println!("      • run file: {}", project.run_file.display());
    println!("      • working directory: {}", command.working_dir().display());
    println!("      • command: {}", command.to_shell_command());
}
