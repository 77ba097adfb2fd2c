//! Integration tests for end-to-end compilation.
//!
//! These tests run the complete pipeline from source text through scanning,
//! parsing and semantic analysis to the generated Java class.

use tcc::{
    compile_source,
    compiler::compiler::compile,
    display_error,
    errors::errors::{Error, LexError, ParseError, SemanticError},
    lexer::lexer::tokenize,
    parser::parser::parse,
    semantic::analyzer::analyze,
};

#[test]
fn test_compile_simple_program() {
    let source = "inteiro a = 1! \n inteiro b = 2! \n inteiro c = a + b! \n imprimir(c)!";
    let output = compile_source(source, "Main").unwrap();

    assert_eq!(
        output,
        "public class Main {\n\
         \tpublic static void main(String[] args) {\n\
         \t\tint a = 1;\n\
         \t\tint b = 2;\n\
         \t\tint c = (a + b);\n\
         \t\tSystem.out.println(c);\n\
         \t}\n\
         }\n"
    );
}

#[test]
fn test_compile_doubles_and_assignments() {
    let source = "real x! real y = 2.0 + 3.0! x = y * 2! imprimir(x / 4)!";

    // `y * 2` mixes types, so the assignment stays a double.
    let output = compile_source(source, "Calc").unwrap();
    let body: Vec<&str> = output.lines().skip(2).take(4).collect();

    assert_eq!(
        body,
        vec![
            "\t\tdouble x;",
            "\t\tdouble y = (2.0 + 3.0);",
            "\t\tx = (y * 2);",
            "\t\tSystem.out.println((x / 4));",
        ]
    );
}

#[test]
fn test_compile_strips_accents() {
    let source = "inteiro número = 1! imprimir(número)!";
    let output = compile_source(source, "Acentos").unwrap();

    assert!(output.contains("\t\tint numero = 1;\n"));
    assert!(output.contains("\t\tSystem.out.println(numero);\n"));
    assert!(!output.contains("número"));
}

#[test]
fn test_compile_with_comments() {
    let source = "# soma\ninteiro x = 1! # oi \n imprimir(x)!";
    let output = compile_source(source, "Comentarios").unwrap();

    assert!(output.contains("\t\tint x = 1;\n\t\tSystem.out.println(x);\n"));
}

#[test]
fn test_pipeline_stages_compose() {
    let source = "inteiro a = 2! a = a * (3 + 4)!";

    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), 15);

    let program = parse(source).unwrap();
    assert_eq!(program.statements.len(), 2);
    analyze(&program).unwrap();

    assert_eq!(compile(&program, "Main"), compile_source(source, "Main").unwrap());
}

#[test]
fn test_compile_is_deterministic() {
    let source = "real a = 1.5! imprimir(a)!";
    assert_eq!(
        compile_source(source, "Main").unwrap(),
        compile_source(source, "Main").unwrap()
    );
}

#[test]
fn test_each_stage_reports_its_error() {
    assert!(matches!(
        compile_source("inteiro a = 1; ", "Main"),
        Err(Error::Lex(LexError::UnrecognisedCharacter { character: ';', .. }))
    ));
    assert!(matches!(
        compile_source("inteiro a = ", "Main"),
        Err(Error::Parse(ParseError::UnexpectedEof { .. }))
    ));
    assert!(matches!(
        compile_source("(1 + 2) = 3 + 4!", "Main"),
        Err(Error::Parse(ParseError::InvalidAssignee { .. }))
    ));
    assert_eq!(
        compile_source("inteiro a = 1.0!", "Main").unwrap_err().get_error_name(),
        "TypeMismatch"
    );
    assert_eq!(
        compile_source("imprimir(b)!", "Main"),
        Err(Error::Semantic(SemanticError::UndeclaredIdentifier(
            "b".to_string()
        )))
    );
    assert_eq!(
        compile_source("inteiro a = 4 / (2 - 2)!", "Main"),
        Err(Error::Semantic(SemanticError::DivisionByZero))
    );
}

#[test]
fn test_display_missing_separator() {
    let source = "inteiro a = 1\n    inteiro b = 2!";
    let error = compile_source(source, "Main").unwrap_err();
    let rendered = display_error(&error, source, "programa.tcc");

    assert_eq!(
        rendered,
        "Error: UnexpectedToken (Unexpected token: `inteiro`, did you miss a `!`?)\n\
         -> programa.tcc\n  |\n\
         2 | inteiro b = 2!\n  \
         | ^\n"
    );
}
