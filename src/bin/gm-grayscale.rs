use graymagick::{args, help};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = real_main() {
        eprintln!("gm-grayscale: {}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn std::error::Error>> {
    help::maybe_print_help_and_exit("gm-grayscale");
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_args(arguments)?;

    for path in plan.execute()? {
        println!("{}", path.display());
    }
    Ok(())
}
