use stacgraph::ui::output;

fn main() {
    if let Err(err) = stacgraph::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
