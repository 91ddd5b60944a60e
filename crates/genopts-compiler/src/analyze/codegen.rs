//! Per-node code generation: dispatch entries, positional captures,
//! exclusion checks and pattern shapes.
//!
//! A single walk over the template. The visitor carries the running
//! "current command" (`None` until the first command token of a pattern)
//! and the running positional slot; both reset at every pattern.

use indexmap::IndexMap;
use rowan::TextRange;

use genopts_core::utils::to_field_name;

use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::ir::build::{
    add, all, argc, argv, assign, aux, boolean, break_loop, cli, current_token, eq, fail, ge, gt,
    if_else, if_then, inc, index_var, int, is_set, slice, str_prefix, sub, suffix, var,
};
use crate::ir::{Block, Expr, Stmt, Type, Var};
use crate::pattern::{Arg, Command, OptionWithArg, Optional, Pattern, Visitor};
use crate::source_map::SourceId;

use super::context::{
    ArgSlot, Capture, CommandId, Context, DispatchEntry, EntryKind, Match, NO_COMMAND,
    PatternShape, PositionalEntry, ROOT,
};

pub(crate) const CMD: &str = "cmd";
pub(crate) const POSITION: &str = "position";

/// Transient field holding the capture for a positional slot.
pub(crate) fn positional_field(slot: usize) -> String {
    format!("positional{slot}")
}

/// Transient field recording which command an option followed.
pub(crate) fn parent_field(token: &str) -> String {
    format!("{}_parent", to_field_name(token))
}

/// Field and type that tell whether an option was given.
pub(crate) fn option_field(option: &OptionWithArg) -> (String, Type) {
    match &option.arg {
        Some(value) => (to_field_name(value), Type::Str),
        None => (to_field_name(&option.token), Type::Flag),
    }
}

pub(crate) struct Codegen<'a> {
    ctx: &'a mut Context,
    diag: &'a mut Diagnostics,
    source: SourceId,
    current: Option<CommandId>,
    position: usize,
    in_optional: bool,
    shape: Option<PatternShape>,
    seen: IndexMap<String, Span>,
}

impl<'a> Codegen<'a> {
    pub(crate) fn new(ctx: &'a mut Context, diag: &'a mut Diagnostics) -> Self {
        let mut codegen = Self {
            ctx,
            diag,
            source: SourceId::default(),
            current: None,
            position: 0,
            in_optional: false,
            shape: None,
            seen: IndexMap::new(),
        };
        codegen.declare_transient(CMD, Type::Int, TextRange::default());
        codegen.declare_transient(POSITION, Type::Int, TextRange::default());
        codegen
    }

    fn span(&self, range: TextRange) -> Span {
        Span::new(self.source, range)
    }

    fn declare_persistent(&mut self, name: &str, ty: Type, range: TextRange) {
        if self.ctx.persistent.declare(name, ty).is_err() {
            self.diag
                .report(self.source, DiagnosticKind::ConflictingFieldType, range)
                .message(name)
                .emit();
        }
    }

    fn declare_transient(&mut self, name: &str, ty: Type, range: TextRange) {
        if self.ctx.transient.declare(name, ty).is_err() {
            self.diag
                .report(self.source, DiagnosticKind::ConflictingFieldType, range)
                .message(name)
                .emit();
        }
    }

    /// Check a reused token against its first declaration.
    ///
    /// Returns `false` when the token conflicts and must not be processed.
    fn check_reuse(
        &mut self,
        token: &str,
        as_command: bool,
        value: Option<&str>,
        range: TextRange,
    ) -> bool {
        let Some(entry) = self.ctx.dispatch.get(token) else {
            return true;
        };
        let first = entry.span;
        let kind = if entry.is_command() != as_command {
            DiagnosticKind::CommandOptionConflict
        } else if entry.value() != value {
            DiagnosticKind::ConflictingValue
        } else {
            return true;
        };
        self.diag
            .report(self.source, kind, range)
            .message(token)
            .related_to("first declared here", first)
            .emit();
        false
    }

    /// Bind a presence flag to its token; a second token on the same field is an error.
    fn claim_flag(&mut self, field: &str, token: &str, range: TextRange) {
        let span = self.span(range);
        let Some((owner, first)) = self.ctx.flag_owners.get(field).cloned() else {
            self.ctx
                .flag_owners
                .insert(field.to_owned(), (token.to_owned(), span));
            return;
        };
        if owner != token {
            self.diag
                .report_at(DiagnosticKind::SharedField, span)
                .message(field)
                .related_to(format!("`{owner}` declared here"), first)
                .emit();
        }
    }

    fn record_parent(&mut self, token: &str) {
        let parent = self.current.unwrap_or(ROOT);
        self.ctx
            .parents
            .entry(token.to_owned())
            .or_default()
            .push(parent);
    }

    fn command_block(&mut self, command: &Command, id: CommandId) -> (String, Block) {
        let field = to_field_name(&command.name);
        let pos_field = format!("{field}_pos");
        self.declare_persistent(&field, Type::Flag, command.span);
        self.declare_persistent(&pos_field, Type::Int, command.span);
        self.claim_flag(&field, &command.name, command.span);

        let mut block = Block::of([
            assign(cli(&field), boolean(true)),
            assign(cli(pos_field), index_var()),
            assign(aux(CMD), int(id as i64)),
        ]);

        if let Some(value) = &command.inline_arg {
            let value_field = to_field_name(value);
            self.declare_persistent(&value_field, Type::Str, command.span);
            let prefix = format!("{}=", command.name);
            let joined = Block::of([assign(
                cli(&value_field),
                suffix(current_token(), prefix.len()),
            )]);
            let separate = Block::of([
                missing_value_check(&command.name),
                inc(index_var()),
                assign(cli(&value_field), current_token()),
            ]);
            block.push(if_else(
                str_prefix(current_token(), prefix),
                joined,
                separate,
            ));
        }

        (field, block)
    }

    fn option_block(&mut self, option: &OptionWithArg) -> (String, Type, Block) {
        let (field, ty) = option_field(option);
        self.declare_persistent(&field, ty, option.span);
        if option.arg.is_none() {
            self.claim_flag(&field, &option.token, option.span);
        }
        let block = match &option.arg {
            None => Block::of([assign(cli(&field), boolean(true))]),
            Some(_) => Block::of([
                missing_value_check(&option.token),
                inc(index_var()),
                assign(cli(&field), current_token()),
            ]),
        };
        (field, ty, block)
    }

    fn add_positional(&mut self, slot: usize, entry: PositionalEntry) {
        let key_cmd = self.current.unwrap_or(NO_COMMAND);
        let span = entry.span;

        let clash = self
            .ctx
            .positionals
            .iter()
            .filter(|((_, cmd), _)| *cmd == key_cmd)
            .find(|((other, _), existing)| {
                let after_variadic =
                    matches!(existing.capture, Capture::Variadic(_)) && *other < slot;
                let before_new_variadic =
                    matches!(entry.capture, Capture::Variadic(_)) && *other > slot;
                let same_slot = *other == slot && existing.capture != entry.capture;
                same_slot || after_variadic || before_new_variadic
            })
            .map(|(_, existing)| existing.span);

        if let Some(first) = clash {
            self.diag
                .report_at(DiagnosticKind::ConflictingPositional, span)
                .related_to("conflicts with this argument", first)
                .emit();
            return;
        }

        log::debug!("positional slot {slot} under command {key_cmd}");
        self.ctx.positionals.entry((slot, key_cmd)).or_insert(entry);
    }
}

fn missing_value_check(token: &str) -> Stmt {
    if_then(
        ge(add(index_var(), int(1)), argc()),
        Block::of([fail(format!("Missing value for {token}"))]),
    )
}

impl Visitor for Codegen<'_> {
    fn enter_pattern(&mut self, pattern: &Pattern) {
        self.source = pattern.source;
        self.current = None;
        self.position = 0;

        let span = self.span(pattern.span);
        if let Some(first) = self.seen.get(&pattern.text) {
            self.diag
                .report_at(DiagnosticKind::DuplicatePattern, span)
                .related_to("first declared here", *first)
                .emit();
        } else {
            self.seen.insert(pattern.text.clone(), span);
        }

        self.shape = Some(PatternShape {
            source: pattern.source,
            text: pattern.text.clone(),
            span,
            commands: Vec::new(),
            args: Vec::new(),
        });
    }

    fn leave_pattern(&mut self, _pattern: &Pattern) {
        self.current = None;
        if let Some(shape) = self.shape.take() {
            self.ctx.shapes.push(shape);
        }
    }

    fn enter_command(&mut self, command: &Command) {
        if command.is_bare() {
            return;
        }
        let token = command.name.as_str();
        if !self.check_reuse(token, true, command.inline_arg.as_deref(), command.span) {
            return;
        }

        let id = match self.ctx.commands.get(token) {
            Some(id) => *id,
            None => {
                let id = self.ctx.next_command_id();
                log::debug!("command `{token}` gets id {id}");
                self.ctx.commands.insert(token.to_owned(), id);
                id
            }
        };
        self.record_parent(token);

        if !self.ctx.dispatch.contains_key(token) {
            let (field, block) = self.command_block(command, id);
            let matching = if command.inline_arg.is_some() {
                Match::Prefix
            } else {
                Match::Exact
            };
            let entry = DispatchEntry {
                kind: EntryKind::Command {
                    id,
                    inline: command.inline_arg.clone(),
                },
                matching,
                field,
                ty: Type::Flag,
                block,
                span: self.span(command.span),
            };
            self.ctx.dispatch.insert(token.to_owned(), entry);
        }

        self.current = Some(id);
        if let Some(shape) = self.shape.as_mut() {
            shape.commands.push(id);
        }
    }

    fn enter_optional(&mut self, optional: &Optional) {
        self.in_optional = true;

        let mut tokens: Vec<String> = Vec::new();
        let mut checks = Vec::new();
        for option in optional.options() {
            if tokens.contains(&option.token) {
                continue;
            }
            tokens.push(option.token.clone());
            checks.push(option_field(option));
        }
        if tokens.len() < 2 || self.ctx.exclusions.contains_key(&tokens) {
            return;
        }

        let count = || var("count");
        let mut block = Block::new().with_var(Var::new("count", Type::Int).with_init(int(0)));
        for (field, ty) in checks {
            block.push(if_then(is_set(cli(field), ty), Block::of([inc(count())])));
        }
        block.push(if_then(
            gt(count(), int(1)),
            Block::of([fail(format!(
                "Only one of {} may be given",
                tokens.join(", ")
            ))]),
        ));
        self.ctx.exclusions.insert(tokens, block);
    }

    fn leave_optional(&mut self, _optional: &Optional) {
        self.in_optional = false;
    }

    fn visit_option(&mut self, option: &OptionWithArg) {
        let token = option.token.as_str();
        if !self.check_reuse(token, false, option.arg.as_deref(), option.span) {
            return;
        }
        self.record_parent(token);
        if self.ctx.dispatch.contains_key(token) {
            return;
        }

        let (field, ty, block) = self.option_block(option);
        log::debug!("option `{token}` stored in `{field}`");
        let entry = DispatchEntry {
            kind: EntryKind::Option {
                value: option.arg.clone(),
            },
            matching: Match::Exact,
            field,
            ty,
            block,
            span: self.span(option.span),
        };
        self.ctx.dispatch.insert(token.to_owned(), entry);
    }

    fn visit_arg(&mut self, arg: &Arg) {
        let field = to_field_name(&arg.name);
        let slot = self.position;
        let span = self.span(arg.span);

        let (capture, block) = if arg.variadic {
            let count_field = format!("{field}_count");
            self.declare_persistent(&field, Type::StrList, arg.span);
            self.declare_persistent(&count_field, Type::Int, arg.span);
            let block = Block::of([
                assign(cli(&field), slice(argv(), index_var())),
                assign(cli(count_field), sub(argc(), index_var())),
                break_loop(),
            ]);
            (Capture::Variadic(field.clone()), block)
        } else {
            self.position += 1;
            self.declare_persistent(&field, Type::Str, arg.span);
            self.declare_transient(&positional_field(slot), Type::Str, arg.span);
            let block = Block::of([
                assign(aux(positional_field(slot)), current_token()),
                inc(aux(POSITION)),
            ]);
            (Capture::Slot, block)
        };

        self.add_positional(
            slot,
            PositionalEntry {
                capture,
                block,
                span,
            },
        );

        if let Some(shape) = self.shape.as_mut() {
            shape.args.push(ArgSlot {
                name: arg.name.clone(),
                field,
                slot,
                optional: self.in_optional,
                variadic: arg.variadic,
                span,
            });
        }
    }
}

/// Condition under which a positional entry fires.
pub(crate) fn positional_condition(slot: usize, cmd: CommandId) -> Expr {
    all([
        eq(aux(POSITION), int(slot as i64)),
        eq(aux(CMD), int(cmd as i64)),
    ])
}
