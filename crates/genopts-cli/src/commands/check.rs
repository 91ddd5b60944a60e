use genopts_compiler::TemplateBuilder;

use super::Input;
use super::loader::{fail, load_or_exit};

pub struct CheckArgs {
    pub input: Input,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source_map = load_or_exit(&args.input);

    let analyzed = match TemplateBuilder::new(source_map.clone())
        .parse()
        .and_then(|parsed| parsed.analyze())
    {
        Ok(analyzed) => analyzed,
        Err(err) => fail(err, &source_map, args.color),
    };

    let diagnostics = analyzed.diagnostics();
    if diagnostics.is_empty() {
        return;
    }

    eprint!("{}", diagnostics.render_colored(&source_map, args.color));
    if args.strict {
        std::process::exit(1);
    }
}
