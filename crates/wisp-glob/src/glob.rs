//! Glob pattern compilation and matching for file names.
//!
//! Implements shell-style glob patterns:
//! - `*` matches zero or more characters (never a path separator)
//! - `?` matches exactly one character (never a path separator)
//! - `{a,b,c}` brace alternation (matches any of the alternatives, nestable)
//! - `\x` escapes `x` so it matches literally
//!
//! A pattern compiles to a small instruction program with [`Glob::compile`]
//! and runs with [`Glob::matches`]. Matching is anchored: the whole
//! candidate name must match, not a substring. Wildcards never match a
//! leading `.`, so dotfiles stay hidden unless the pattern itself starts
//! with a literal `.`.

use std::cell::Cell;
use std::path::MAIN_SEPARATOR;

/// Maximum number of recursive calls for glob matching. Protects against
/// adversarial patterns like `*a*a*a*...*a` that cause O(n^k) backtracking.
/// Counted as total work (calls), not stack depth, to bound actual CPU cost.
const MAX_MATCH_CALLS: usize = 100_000;

/// One instruction of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    /// Match this exact character.
    Lit(char),
    /// `?`: exactly one character that is not a separator.
    AnyOne,
    /// `*`: zero or more characters that are not separators.
    AnyRun,
    /// The path separator itself.
    Sep,
    /// Zero-width: the next input character (if any) must not be `.`.
    NotDot,
    /// `{`: start of an alternation group.
    Open,
    /// `,` inside a group: boundary between alternatives.
    Alt,
    /// `}`: end of an alternation group.
    Close,
}

/// A compiled glob pattern over a single file name.
///
/// # Examples
/// ```
/// use wisp_glob::Glob;
///
/// let glob = Glob::compile("*.{rs,go}");
/// assert!(glob.matches("main.rs"));
/// assert!(glob.matches("server.go"));
/// assert!(!glob.matches("style.css"));
/// assert!(!glob.matches(".hidden.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct Glob {
    ops: Vec<Op>,
}

impl Glob {
    /// Compile a pattern in a single left-to-right scan.
    ///
    /// Compilation never fails. Unbalanced braces are not validated: an
    /// unclosed `{` group runs to the end of the pattern, and a stray `}`
    /// yields a program that matches nothing.
    pub fn compile(pattern: &str) -> Glob {
        let chars: Vec<char> = pattern.chars().collect();
        let mut ops = Vec::with_capacity(chars.len() + 1);

        // Dotfile protection is decided once from the pattern's first
        // character: only a pattern that spells out the leading dot may
        // match hidden names.
        if !pattern.starts_with('.') {
            ops.push(Op::NotDot);
        }

        let mut depth: i32 = 0;
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '\\' => {
                    // Escape: the next character matches itself. A trailing
                    // lone backslash stays a literal backslash.
                    match chars.get(i + 1) {
                        Some(&c) => {
                            ops.push(Op::Lit(c));
                            i += 2;
                        }
                        None => {
                            ops.push(Op::Lit('\\'));
                            i += 1;
                        }
                    }
                }
                c if c == MAIN_SEPARATOR => {
                    ops.push(Op::Sep);
                    // The segment after a separator is a fresh file name and
                    // gets the same dotfile protection, unless the pattern
                    // spells out the dot itself.
                    if chars.get(i + 1) != Some(&'.') {
                        ops.push(Op::NotDot);
                    }
                    i += 1;
                }
                '*' => {
                    ops.push(Op::AnyRun);
                    i += 1;
                }
                '?' => {
                    ops.push(Op::AnyOne);
                    i += 1;
                }
                '{' => {
                    ops.push(Op::Open);
                    depth += 1;
                    i += 1;
                }
                '}' => {
                    ops.push(Op::Close);
                    depth -= 1;
                    i += 1;
                }
                ',' if depth > 0 => {
                    ops.push(Op::Alt);
                    i += 1;
                }
                c => {
                    ops.push(Op::Lit(c));
                    i += 1;
                }
            }
        }

        Glob { ops }
    }

    /// Match a candidate name against the compiled pattern.
    ///
    /// The match is anchored at both ends: the entire name must be
    /// consumed. Returns `false` (non-match) if total matching work exceeds
    /// `MAX_MATCH_CALLS`.
    pub fn matches(&self, name: &str) -> bool {
        let input: Vec<char> = name.chars().collect();
        let calls = Cell::new(0usize);
        match_ops(&self.ops, 0, &input, 0, &calls)
    }
}

/// Match a name against a pattern in one call.
///
/// # Examples
/// ```
/// use wisp_glob::glob_match;
///
/// assert!(glob_match("*.rs", "main.rs"));
/// assert!(glob_match("test?", "test1"));
/// assert!(glob_match("a{b,c}d", "acd"));
/// assert!(!glob_match("*.txt", "main.rs"));
/// ```
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Glob::compile(pattern).matches(name)
}

/// Check if a string contains glob metacharacters (`*`, `?`, `{`).
///
/// Useful for callers that want to detect when a path argument is a glob
/// pattern and switch to pattern-matching mode.
///
/// ```
/// use wisp_glob::contains_glob;
/// assert!(contains_glob("*.rs"));
/// assert!(contains_glob("src/file{1,2}.txt"));
/// assert!(!contains_glob("src/main.rs"));
/// ```
pub fn contains_glob(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('{')
}

/// Work-bounded backtracking over the instruction program.
///
/// Returns `false` (non-match) once total recursive calls exceed
/// `MAX_MATCH_CALLS`, preventing ReDoS from adversarial patterns.
fn match_ops(ops: &[Op], oi: usize, input: &[char], ii: usize, calls: &Cell<usize>) -> bool {
    let count = calls.get() + 1;
    calls.set(count);
    if count > MAX_MATCH_CALLS {
        return false;
    }

    // Program exhausted: match iff the input is fully consumed.
    if oi >= ops.len() {
        return ii >= input.len();
    }

    match ops[oi] {
        Op::Lit(c) => {
            if ii < input.len() && input[ii] == c {
                match_ops(ops, oi + 1, input, ii + 1, calls)
            } else {
                false
            }
        }

        Op::Sep => {
            if ii < input.len() && input[ii] == MAIN_SEPARATOR {
                match_ops(ops, oi + 1, input, ii + 1, calls)
            } else {
                false
            }
        }

        Op::AnyOne => {
            if ii < input.len() && input[ii] != MAIN_SEPARATOR {
                match_ops(ops, oi + 1, input, ii + 1, calls)
            } else {
                false
            }
        }

        Op::AnyRun => {
            // Try consuming 0, 1, 2, ... characters, never past a separator.
            let mut end = ii;
            loop {
                if match_ops(ops, oi + 1, input, end, calls) {
                    return true;
                }
                if end >= input.len() || input[end] == MAIN_SEPARATOR {
                    return false;
                }
                end += 1;
            }
        }

        Op::NotDot => {
            if ii < input.len() && input[ii] == '.' {
                false
            } else {
                match_ops(ops, oi + 1, input, ii, calls)
            }
        }

        Op::Open => {
            // Split the group into its alternatives and try each one with
            // the remainder of the program appended.
            let (alts, rest) = split_group(ops, oi + 1);
            for alt in alts {
                let mut cont = Vec::with_capacity(alt.len() + rest.len());
                cont.extend_from_slice(alt);
                cont.extend_from_slice(rest);
                if match_ops(&cont, 0, input, ii, calls) {
                    return true;
                }
            }
            false
        }

        // A close or alternative marker with no enclosing group. The
        // compiler emits these for unbalanced patterns; such a program
        // cannot match anything.
        Op::Close | Op::Alt => false,
    }
}

/// Find the alternatives of the group whose `Open` sits just before
/// `start`, and the remainder of the program past its matching `Close`.
///
/// An unclosed group extends to the end of the program.
fn split_group(ops: &[Op], start: usize) -> (Vec<&[Op]>, &[Op]) {
    let mut alts = Vec::new();
    let mut depth = 1;
    let mut alt_start = start;
    let mut j = start;

    while j < ops.len() {
        match ops[j] {
            Op::Open => depth += 1,
            Op::Close => {
                depth -= 1;
                if depth == 0 {
                    alts.push(&ops[alt_start..j]);
                    return (alts, &ops[j + 1..]);
                }
            }
            Op::Alt if depth == 1 => {
                alts.push(&ops[alt_start..j]);
                alt_start = j + 1;
            }
            _ => {}
        }
        j += 1;
    }

    alts.push(&ops[alt_start..]);
    (alts, &[])
}
