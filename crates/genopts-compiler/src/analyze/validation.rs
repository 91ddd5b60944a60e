//! Passes that run once every pattern has been visited.
//!
//! - `add_help`: declares `--help` unless a pattern already does
//! - `add_scope_checks`: options bound to specific commands
//! - `add_combinations`: command combinations and required arguments

use indexmap::IndexMap;

use genopts_core::utils::english_list;

use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::ir::build::{
    all, assign, aux, boolean, cli, fail, if_else, if_then, int, is_set, is_unset, ne,
};
use crate::ir::{Block, Expr, Type, chain};

use super::codegen::{CMD, parent_field, positional_field};
use super::context::{ArgSlot, CommandId, Context, DispatchEntry, EntryKind, Match, ROOT};

pub const HELP_TOKEN: &str = "--help";
/// Field candidates for an implicit `--help`, tried in order.
const HELP_FIELDS: [&str; 2] = ["help", "help_flag"];

/// Make sure a help flag exists and remember its predicate.
pub fn add_help(ctx: &mut Context, diag: &mut Diagnostics) {
    if !ctx.dispatch.contains_key(HELP_TOKEN) {
        let Some(field) = HELP_FIELDS
            .into_iter()
            .find(|field| ctx.persistent.insert_new(field, Type::Flag))
        else {
            let taken = HELP_FIELDS[HELP_FIELDS.len() - 1];
            if let Some(span) = field_owner(ctx, taken) {
                diag.report_at(DiagnosticKind::SharedField, span)
                    .message(taken)
                    .emit();
            }
            return;
        };
        log::debug!("adding implicit `{HELP_TOKEN}` stored in `{field}`");
        let entry = DispatchEntry {
            kind: EntryKind::Option { value: None },
            matching: Match::Exact,
            field: field.to_owned(),
            ty: Type::Flag,
            block: Block::of([assign(cli(field), boolean(true))]),
            span: Span::default(),
        };
        ctx.flag_owners
            .insert(field.to_owned(), (HELP_TOKEN.to_owned(), Span::default()));
        ctx.dispatch.insert(HELP_TOKEN.to_owned(), entry);
        ctx.parents.insert(HELP_TOKEN.to_owned(), vec![ROOT]);
    }

    ctx.help = ctx
        .dispatch
        .get(HELP_TOKEN)
        .map(|entry| is_set(cli(&entry.field), entry.ty));
}

fn field_owner(ctx: &Context, field: &str) -> Option<Span> {
    ctx.dispatch
        .values()
        .find(|entry| entry.field == field)
        .map(|entry| entry.span)
        .or_else(|| {
            ctx.shapes
                .iter()
                .flat_map(|shape| &shape.args)
                .find(|arg| arg.field == field)
                .map(|arg| arg.span)
        })
}

/// Record the parent of scoped options and reject them under other commands.
pub fn add_scope_checks(ctx: &mut Context) {
    let scoped: Vec<(String, Vec<CommandId>)> = ctx
        .dispatch
        .iter()
        .filter(|(_, entry)| !entry.is_command())
        .filter_map(|(token, _)| {
            let mut parents = ctx.parents.get(token)?.clone();
            if parents.contains(&ROOT) {
                return None;
            }
            parents.sort_unstable();
            parents.dedup();
            Some((token.clone(), parents))
        })
        .collect();

    for (token, parents) in scoped {
        let pfield = parent_field(&token);
        if ctx.transient.declare(&pfield, Type::Int).is_err() {
            continue;
        }

        let names: Vec<String> = parents
            .iter()
            .filter_map(|id| ctx.command_name(*id))
            .map(str::to_owned)
            .collect();
        let noun = if names.len() == 1 { "command" } else { "commands" };
        let message = format!(
            "Option {token} may only be given for {noun} {}",
            english_list(&names)
        );

        let Some(entry) = ctx.dispatch.get_mut(&token) else {
            continue;
        };
        entry.block.push(assign(aux(&pfield), aux(CMD)));
        let mut terms = vec![is_set(cli(&entry.field), entry.ty)];
        terms.extend(parents.iter().map(|id| ne(aux(&pfield), int(*id as i64))));

        log::debug!("option `{token}` scoped to {}", names.join(", "));
        ctx.scope_checks
            .push(if_then(all(terms), Block::of([fail(message)])));
    }
}

/// Build the command-combination chain.
pub fn add_combinations(ctx: &mut Context, diag: &mut Diagnostics) {
    let mut groups: IndexMap<Vec<CommandId>, &[ArgSlot]> = IndexMap::new();
    for shape in &ctx.shapes {
        match groups.get(&shape.commands) {
            None => {
                groups.insert(shape.commands.clone(), &shape.args);
            }
            Some(args) => {
                let same = args.len() == shape.args.len()
                    && args.iter().zip(&shape.args).all(|(a, b)| a.same_layout(b));
                if !same {
                    let mut builder =
                        diag.report_at(DiagnosticKind::ConflictingPositional, shape.span);
                    if let Some(first) = args.first() {
                        builder =
                            builder.related_to("other layout for the same commands", first.span);
                    }
                    builder
                        .message("patterns with the same commands take different arguments")
                        .emit();
                }
            }
        }
    }

    let mut ordered: Vec<(Vec<CommandId>, &[ArgSlot])> = groups.into_iter().collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut branches = Vec::new();
    let mut fallback = None;
    for (commands, args) in ordered {
        let Some(body) = group_body(args, diag) else {
            continue;
        };
        if commands.is_empty() {
            fallback = Some(body);
            continue;
        }
        let cond = all(commands.iter().filter_map(|id| command_flag(ctx, *id)));
        branches.push((cond, body));
    }

    let fallback =
        fallback.unwrap_or_else(|| Block::of([fail("Please specify a proper command")]));
    log::debug!("{} command combinations", branches.len());
    ctx.combinations = chain(branches, Some(fallback));
}

fn command_flag(ctx: &Context, id: CommandId) -> Option<Expr> {
    let name = ctx.command_name(id)?;
    let entry = ctx.dispatch.get(name)?;
    Some(is_set(cli(&entry.field), Type::Flag))
}

/// Resolve captured positionals and check required ones.
fn group_body(args: &[ArgSlot], diag: &mut Diagnostics) -> Option<Block> {
    let mut body = Block::new();
    let fixed: Vec<&ArgSlot> = args.iter().filter(|a| !a.variadic).collect();

    match fixed.as_slice() {
        [first, second] if args.len() == 2 && first.optional && !second.optional => {
            let both = Block::of([
                assign(cli(&first.field), aux(positional_field(first.slot))),
                assign(cli(&second.field), aux(positional_field(second.slot))),
            ]);
            let single = Block::of([assign(
                cli(&second.field),
                aux(positional_field(first.slot)),
            )]);
            body.push(if_else(
                is_set(aux(positional_field(second.slot)), Type::Str),
                both,
                single,
            ));
        }
        _ => {
            if let Some(misplaced) = optional_before_required(args) {
                let detail = format!("`<{}>` is followed by a required argument", misplaced.name);
                diag.report_at(DiagnosticKind::UnsupportedOptionalPositional, misplaced.span)
                    .message(detail)
                    .emit();
                return None;
            }
            for arg in &fixed {
                body.push(assign(cli(&arg.field), aux(positional_field(arg.slot))));
            }
        }
    }

    for arg in args.iter().filter(|a| !a.optional) {
        let ty = if arg.variadic { Type::StrList } else { Type::Str };
        body.push(if_then(
            is_unset(cli(&arg.field), ty),
            Block::of([fail(format!("Required argument <{}> is missing", arg.name))]),
        ));
    }

    Some(body)
}

fn optional_before_required(args: &[ArgSlot]) -> Option<&ArgSlot> {
    let first_optional = args.iter().position(|a| a.optional)?;
    args[first_optional + 1..]
        .iter()
        .any(|a| !a.optional)
        .then(|| &args[first_optional])
}
