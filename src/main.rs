fn main() {
    if let Err(err) = subgraph_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
