use std::path::PathBuf;

fn config_arg() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

fn main() {
    let config = config_arg();
    if let Err(e) = keycast_app_lib::app::run(config.as_deref()) {
        eprintln!("keycast: {:#}", e);
        std::process::exit(1);
    }
}
