use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ast::ast::{Program, Stmt};

use super::{
    expr::gen_expression,
    stmt::{gen_declaration, gen_print},
};

/// Renders `program` as a Java class whose `main` runs its statements in order.
///
/// The program must already have passed semantic analysis; nothing here
/// re-checks it.
pub fn compile(program: &Program, class_name: &str) -> String {
    let mut main = String::new();

    main.push_str(&format!("public class {} {{\n", class_name));
    main.push_str("\tpublic static void main(String[] args) {\n");

    for stmt in &program.statements {
        let line = match stmt {
            Stmt::Declaration(declaration) => gen_declaration(declaration),
            Stmt::Print(print) => gen_print(print),
            Stmt::Expression(expr) => gen_expression(expr),
        };

        main.push_str("\t\t");
        main.push_str(&line);
        main.push_str(";\n");
    }

    main.push_str("\t}\n");
    main.push_str("}\n");

    debug!("generated class {} ({} bytes)", class_name, main.len());
    main
}

/// The Java class name for a source file: its stem with the first letter upper-cased.
pub fn class_name_for(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let mut chars = stem.chars();
    let first = chars.next()?;

    Some(first.to_uppercase().chain(chars).collect())
}

/// Where the generated file goes: `<ClassName>.java` in `out_dir`, or next to
/// the source when no directory is given.
pub fn output_path_for(path: &Path, out_dir: Option<&Path>) -> Option<PathBuf> {
    let class_name = class_name_for(path)?;
    let directory = match out_dir {
        Some(directory) => directory.to_path_buf(),
        None => path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    Some(directory.join(format!("{}.java", class_name)))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn test_class_name_for() {
        assert_eq!(class_name_for(Path::new("dir/programa.tcc")), Some("Programa".to_string()));
        assert_eq!(class_name_for(Path::new("main")), Some("Main".to_string()));
        assert_eq!(class_name_for(Path::new("")), None);
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("src/calc.tcc"), None),
            Some(PathBuf::from("src/Calc.java"))
        );
        assert_eq!(
            output_path_for(Path::new("calc.tcc"), None),
            Some(PathBuf::from("Calc.java"))
        );
        assert_eq!(
            output_path_for(Path::new("src/calc.tcc"), Some(Path::new("build"))),
            Some(PathBuf::from("build/Calc.java"))
        );
    }

    #[test]
    fn test_compile_empty_program() {
        let output = compile(&Program::default(), "Empty");
        assert_eq!(
            output,
            "public class Empty {\n\tpublic static void main(String[] args) {\n\t}\n}\n"
        );
    }
}
