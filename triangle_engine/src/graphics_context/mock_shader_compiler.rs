/// Minimal GLSL ES 1.00 front end for MockGraphicsContext
///
/// Not a compiler: it accepts the shape of a small shader (global
/// declarations followed by function definitions) and rejects what a real
/// driver would reject for it: unbalanced delimiters, statements missing
/// their `;`, unknown declaration types, qualifiers used in the wrong stage,
/// a missing `main()`, and a fragment shader without a float precision.
/// Info logs follow the `ERROR: 0:<line>: '<token>' : <message>` layout
/// browsers report.

use std::fmt::Display;
use crate::graphics_context::ShaderStage;

const FLOAT_TYPES: &[&str] = &["float", "vec2", "vec3", "vec4", "mat2", "mat3", "mat4"];
const OTHER_TYPES: &[&str] = &[
    "int", "ivec2", "ivec3", "ivec4", "bool", "bvec2", "bvec3", "bvec4", "sampler2D", "samplerCube",
];
const PRECISIONS: &[&str] = &["lowp", "mediump", "highp"];

/// Storage qualifier of a global declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageQualifier {
    Attribute,
    Uniform,
    Varying,
    Const,
    Global,
}

/// One declared global variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub qualifier: StorageQualifier,
    pub type_name: String,
    pub name: String,
}

/// Interface of a successfully compiled shader
#[derive(Debug, Clone, Default)]
pub(crate) struct ShaderReflection {
    pub declarations: Vec<Declaration>,
}

impl ShaderReflection {
    pub fn with_qualifier(&self, qualifier: StorageQualifier) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(move |d| d.qualifier == qualifier)
    }
}

/// Compile `source` for `stage`, returning its reflection or an info log
pub(crate) fn compile(stage: ShaderStage, source: &str) -> Result<ShaderReflection, String> {
    let text = preprocess(source)?;
    let mut parser = Parser::new(stage);
    parser.run(&text)?;
    parser.finish(&text)
}

fn syntax(line: usize, token: impl Display) -> String {
    format!("ERROR: 0:{}: '{}' : syntax error", line, token)
}

fn is_type(word: &str) -> bool {
    FLOAT_TYPES.contains(&word) || OTHER_TYPES.contains(&word)
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ===== PREPROCESSING =====

/// Blank out comments and preprocessor directives, keeping line breaks
fn preprocess(source: &str) -> Result<String, String> {
    let mut stripped = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        stripped.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        stripped.push('\n');
                    }
                    if previous == '*' && c == '/' {
                        break;
                    }
                    previous = c;
                }
                stripped.push(' ');
            }
            _ => stripped.push(c),
        }
    }

    let mut text = String::with_capacity(stripped.len());
    for (index, line) in stripped.lines().enumerate() {
        let trimmed = line.trim_start();
        if let Some(directive) = trimmed.strip_prefix('#') {
            let mut words = directive.split_whitespace();
            if words.next() == Some("version") {
                let version = words.next().unwrap_or("");
                if version != "100" {
                    return Err(format!(
                        "ERROR: 0:{}: '{}' : version number not supported",
                        index + 1,
                        version
                    ));
                }
            }
        } else {
            text.push_str(line);
        }
        text.push('\n');
    }
    Ok(text)
}

// ===== PARSER =====

struct Parser {
    stage: ShaderStage,
    reflection: ShaderReflection,
    functions: Vec<String>,
    float_precision: bool,
    last_line: usize,
}

impl Parser {
    fn new(stage: ShaderStage) -> Self {
        Self {
            stage,
            reflection: ShaderReflection::default(),
            functions: Vec::new(),
            float_precision: false,
            last_line: 1,
        }
    }

    fn run(&mut self, text: &str) -> Result<(), String> {
        let mut line = 1usize;
        let mut stack: Vec<(char, usize)> = Vec::new();
        let mut segment = String::new();
        let mut body_depth = 0usize;
        let mut pending = false;

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                if body_depth == 0 {
                    segment.push(' ');
                }
                continue;
            }

            match ch {
                '(' | '[' | '{' => stack.push((ch, line)),
                ')' | ']' | '}' => {
                    let open = match ch {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match stack.pop() {
                        Some((o, _)) if o == open => {}
                        _ => return Err(syntax(line, ch)),
                    }
                }
                _ => {}
            }

            if body_depth == 0 {
                match ch {
                    ';' => {
                        if !stack.is_empty() {
                            return Err(syntax(line, ch));
                        }
                        self.declaration(&segment, line)?;
                        segment.clear();
                    }
                    '{' => {
                        self.function_header(&segment, line)?;
                        segment.clear();
                        body_depth = 1;
                        pending = false;
                    }
                    _ => segment.push(ch),
                }
            } else {
                match ch {
                    '{' => {
                        body_depth += 1;
                        pending = false;
                    }
                    '}' => {
                        if pending {
                            return Err(syntax(line, ch));
                        }
                        body_depth -= 1;
                    }
                    ';' => pending = false,
                    c if c.is_whitespace() => {}
                    _ => pending = true,
                }
            }
        }

        self.last_line = line;
        if let Some((open, opened_at)) = stack.last() {
            return Err(format!(
                "ERROR: 0:{}: '' : syntax error: unexpected end of file ('{}' opened at line {})",
                line, open, opened_at
            ));
        }
        if !segment.trim().is_empty() {
            return Err(format!(
                "ERROR: 0:{}: '' : syntax error: unexpected end of file",
                line
            ));
        }
        Ok(())
    }

    fn function_header(&mut self, segment: &str, line: usize) -> Result<(), String> {
        let header = segment.trim();
        let open = header.find('(').ok_or_else(|| syntax(line, '{'))?;
        if !header.ends_with(')') {
            return Err(syntax(line, header));
        }
        let words: Vec<&str> = header[..open].split_whitespace().collect();
        match words.as_slice() {
            [ret, name] if (*ret == "void" || is_type(ret)) && is_identifier(name) => {
                self.functions.push(name.to_string());
                Ok(())
            }
            _ => Err(syntax(line, header)),
        }
    }

    fn declaration(&mut self, segment: &str, line: usize) -> Result<(), String> {
        let normalized = segment
            .replace(',', " , ")
            .replace('[', " [ ")
            .replace(']', " ] ")
            .replace('=', " = ");
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(());
        }

        if tokens[0] == "precision" {
            return match tokens.as_slice() {
                [_, precision, type_name] if PRECISIONS.contains(precision) => {
                    if *type_name == "float" {
                        self.float_precision = true;
                    } else if !is_type(type_name) {
                        return Err(syntax(line, type_name));
                    }
                    Ok(())
                }
                _ => Err(syntax(line, tokens.get(1).copied().unwrap_or(";"))),
            };
        }

        let mut idx = 0;
        let qualifier = match tokens[0] {
            "attribute" => StorageQualifier::Attribute,
            "uniform" => StorageQualifier::Uniform,
            "varying" => StorageQualifier::Varying,
            "const" => StorageQualifier::Const,
            _ => StorageQualifier::Global,
        };
        if qualifier != StorageQualifier::Global {
            idx += 1;
        }
        if tokens.get(idx).is_some_and(|t| PRECISIONS.contains(t)) {
            idx += 1;
        }

        let type_name = *tokens.get(idx).ok_or_else(|| syntax(line, ';'))?;
        if !is_type(type_name) {
            return Err(syntax(line, type_name));
        }
        idx += 1;

        match qualifier {
            StorageQualifier::Attribute if self.stage == ShaderStage::Fragment => {
                return Err(format!(
                    "ERROR: 0:{}: 'attribute' : supported in vertex shaders only",
                    line
                ));
            }
            StorageQualifier::Attribute | StorageQualifier::Varying
                if !FLOAT_TYPES.contains(&type_name) =>
            {
                return Err(format!(
                    "ERROR: 0:{}: '{}' : cannot be bool or int",
                    line, tokens[0]
                ));
            }
            _ => {}
        }

        loop {
            let name = *tokens.get(idx).ok_or_else(|| syntax(line, ';'))?;
            if !is_identifier(name) {
                return Err(syntax(line, name));
            }
            if name.starts_with("gl_") {
                return Err(format!("ERROR: 0:{}: '{}' : reserved built-in name", line, name));
            }
            idx += 1;

            if tokens.get(idx) == Some(&"[") {
                match (tokens.get(idx + 1), tokens.get(idx + 2)) {
                    (Some(size), Some(&"]")) if size.parse::<u32>().is_ok_and(|n| n > 0) => idx += 3,
                    (Some(size), _) => return Err(syntax(line, size)),
                    (None, _) => return Err(syntax(line, '[')),
                }
            }

            self.reflection.declarations.push(Declaration {
                qualifier,
                type_name: type_name.to_string(),
                name: name.to_string(),
            });

            match tokens.get(idx) {
                None => break,
                Some(&",") => idx += 1,
                Some(&"=") => {
                    if matches!(
                        qualifier,
                        StorageQualifier::Attribute | StorageQualifier::Uniform | StorageQualifier::Varying
                    ) {
                        return Err(format!(
                            "ERROR: 0:{}: '=' : cannot initialize this type of qualifier",
                            line
                        ));
                    }
                    // Initializer expressions are not checked
                    break;
                }
                Some(other) => return Err(syntax(line, other)),
            }
        }
        Ok(())
    }

    fn finish(self, text: &str) -> Result<ShaderReflection, String> {
        if !self.functions.iter().any(|f| f == "main") {
            return Err(format!("ERROR: 0:{}: '' : Missing main()", self.last_line));
        }
        if self.stage == ShaderStage::Fragment && !self.float_precision {
            let uses_float = text
                .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .any(|word| FLOAT_TYPES.contains(&word));
            if uses_float {
                return Err("ERROR: 0:1: '' : No precision specified for (float)".to_string());
            }
        }
        Ok(self.reflection)
    }
}

#[cfg(test)]
#[path = "mock_shader_compiler_tests.rs"]
mod tests;
