use std::fs;
use std::path::PathBuf;

use genopts_compiler::{BackendKind, Config, TemplateBuilder};

use super::Input;
use super::loader::{fail, load_or_exit};

pub struct GenerateArgs {
    pub input: Input,
    pub backend: BackendKind,
    pub name: String,
    pub header: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let source_map = load_or_exit(&args.input);

    let analyzed = match TemplateBuilder::new(source_map.clone())
        .parse()
        .and_then(|parsed| parsed.analyze())
    {
        Ok(analyzed) => analyzed,
        Err(err) => fail(err, &source_map, args.color),
    };

    let diagnostics = analyzed.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(&source_map, args.color));
    }

    let config = Config::new().name(args.name).header(args.header);
    let code = analyzed.generate(args.backend, config);
    log::info!(
        "generated {} bytes of {} source",
        code.len(),
        args.backend.name()
    );

    match args.output {
        Some(path) => {
            if let Err(err) = fs::write(&path, &code) {
                eprintln!("error: failed to write '{}': {}", path.display(), err);
                std::process::exit(1);
            }
        }
        None => print!("{}", code),
    }
}
