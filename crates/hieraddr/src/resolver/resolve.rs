//! The resolution algorithm.
//!
//! A single linear pass over the template tokens, with two independent
//! memoization tables (tuple answers and value answers) and one shared
//! wildcard cursor, all scoped to the current call.

use tracing::warn;

use crate::parser::AddressTemplate;
use crate::resolver::context::ResolutionContext;
use crate::resolver::error::{ResolveError, suggest_names};
use crate::resolver::memory::Memory;
use crate::types::{AddressSegment, ResourceAddress};

/// Resolve `template` against `ctx`, appending one segment per token to
/// `base`.
///
/// Per token, in template order:
///
/// - A bare `{name}` token pulls the next tuple candidate for `name`. If the
///   context has none left, the segment is **suppressed**: a warning is
///   logged, nothing is appended, and resolution continues. A symbolic branch
///   that does not exist in the current context is dropped, not an error.
/// - Any other bare token must be a literal `key=value` pair; a missing `=`
///   is a malformed template and aborts.
/// - A value expression resolves its key and value sides independently
///   (literal text as-is, `{name}` through the next value candidate for
///   `name`). Both sides are mandatory; an exhausted reference aborts with
///   [`ResolveError::UnresolvableReference`].
/// - A resolved value of exactly `*` consumes the next entry of `wildcards`.
///   The cursor is shared across the whole call, whichever key triggered the
///   substitution. Running out of a **non-empty** wildcard list aborts with
///   [`ResolveError::WildcardUnderrun`]; with no wildcards supplied at all,
///   the literal `*` is kept.
///
/// Repeated references consume sequentially: the N-th occurrence of `{name}`
/// yields the N-th candidate the context returned for `name`.
///
/// # Errors
///
/// Fatal conditions ([`ResolveError`]) abort the whole call; no partial
/// address is returned.
///
/// # Example
///
/// ```
/// use hieraddr::{MapContext, address, parse_template};
///
/// let ctx = MapContext::new().with_tuple("selected.profile", "profile", "default");
/// let template = parse_template("{selected.profile}/subsystem=*");
///
/// let addr = template.resolve(&ctx, &["datasources"]).unwrap();
/// assert_eq!(addr, address![("profile", "default"), ("subsystem", "datasources")]);
/// ```
pub fn resolve_template(
    template: &AddressTemplate,
    base: ResourceAddress,
    ctx: &impl ResolutionContext,
    wildcards: &[&str],
) -> Result<ResourceAddress, ResolveError> {
    let mut address = base;
    let mut tuple_memory: Memory<(String, String)> = Memory::new();
    let mut value_memory: Memory<String> = Memory::new();
    let mut next_wildcard = 0;

    for token in template.tokens() {
        match token.key() {
            None => {
                resolve_bare(token.value(), &mut address, ctx, &mut tuple_memory)?;
            }
            Some(key_expr) => {
                let key = resolve_part(key_expr, ctx, &mut value_memory)?;
                let value = resolve_part(token.value(), ctx, &mut value_memory)?;
                let value = substitute_wildcard(&key, value, wildcards, &mut next_wildcard)?;
                address.push(AddressSegment::new(key, value));
            }
        }
    }

    Ok(address)
}

/// Resolve a bare token: a `{name}` tuple reference or a literal `k=v` pair.
fn resolve_bare(
    expr: &str,
    address: &mut ResourceAddress,
    ctx: &impl ResolutionContext,
    tuple_memory: &mut Memory<(String, String)>,
) -> Result<(), ResolveError> {
    if let Some(name) = reference_name(expr) {
        if !tuple_memory.contains(name) {
            tuple_memory.memorize(name, ctx.collect_tuples(name));
        }
        match tuple_memory.next(name) {
            Some(tuple) => address.push(AddressSegment::from(tuple)),
            None => warn!(reference = name, "suppressing unresolvable address segment"),
        }
        return Ok(());
    }

    let (key, value) = expr
        .split_once('=')
        .ok_or_else(|| ResolveError::MalformedTemplate {
            segment: expr.to_string(),
        })?;
    address.push(AddressSegment::new(key, value));
    Ok(())
}

/// Resolve one side of a value expression. Literal text passes through;
/// a `{name}` reference takes the next value candidate and is mandatory.
fn resolve_part(
    expr: &str,
    ctx: &impl ResolutionContext,
    value_memory: &mut Memory<String>,
) -> Result<String, ResolveError> {
    let Some(name) = reference_name(expr) else {
        return Ok(expr.to_string());
    };

    if !value_memory.contains(name) {
        value_memory.memorize(name, ctx.collect_values(name));
    }
    value_memory
        .next(name)
        .ok_or_else(|| ResolveError::UnresolvableReference {
            name: name.to_string(),
            suggestions: suggest_names(name, &ctx.known_names()),
        })
}

/// Replace a resolved `*` with the next unconsumed wildcard. No wildcards
/// supplied means the literal `*` is kept; a non-empty list that runs out is
/// an underrun.
fn substitute_wildcard(
    key: &str,
    value: String,
    wildcards: &[&str],
    cursor: &mut usize,
) -> Result<String, ResolveError> {
    if value != "*" || wildcards.is_empty() {
        return Ok(value);
    }

    let replacement = wildcards
        .get(*cursor)
        .ok_or_else(|| ResolveError::WildcardUnderrun {
            key: key.to_string(),
        })?;
    *cursor += 1;
    Ok((*replacement).to_string())
}

/// The name inside a `{...}` reference, or `None` for literal text.
fn reference_name(expr: &str) -> Option<&str> {
    expr.strip_prefix('{')?.strip_suffix('}')
}
