use std::process;

fn main() {
    env_logger::init();

    match wildcard_pattern::run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(2);
        }
    }
}
