//! Snapshot tests for complete rendered files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use strlang::{Emitter, FieldTags, Func, GoEmitter, JsEmitter, Method, Newlines, PhpEmitter};

#[test]
fn test_go_model_file() {
    let mut go = GoEmitter::new("models");
    go.add_imports(["errors", "fmt"]);

    go.struct_type("User", |go| {
        go.field_tagged(
            "ID",
            "int64",
            &FieldTags::new().tag("json", "id").tag("db", "id"),
        )
        .field_tagged("Email", "string", &FieldTags::new().tag("json", "email"));
    });

    go.func(&Func::new("Validate").receiver("u User").returns("error"), |go| {
        go.if_stmt("u.ID <= 0", |go| {
            go.write_line("return errors.New(\"invalid id\")");
        })
        .else_if("u.Email == \"\"", |go| {
            go.write_line("return fmt.Errorf(\"user %d has no email\", u.ID)");
        });
        go.write_line("return nil");
    });

    go.add_imports(["fmt"]);

    insta::assert_snapshot!("go_model_file", go.render());
}

#[test]
fn test_php_class_file() {
    let mut php = PhpEmitter::new("App\\Models");

    php.class("User", |php| {
        php.write_line_n("private string $email;", Newlines::TWO);

        let method = Method::new("getEmail").modifier("public").returns("string");
        php.method(&method, |php| {
            php.if_stmt("$this->email === ''", |php| {
                php.write_line("throw new \\RuntimeException('missing email');");
            })
            .else_branch(|php| {
                php.write_line("return $this->email;");
            });
        });
    });

    insta::assert_snapshot!("php_class_file", php.render());
}

#[test]
fn test_js_module_file() {
    let mut js = JsEmitter::new();

    js.export().object("const", "config", |js| {
        js.write_line("retries: 3,");
        js.block("headers: {", "},", |b| {
            b.write_line("accept: 'application/json',");
        });
    });
    js.write_line("");

    js.export().write_raw("function retry(n) {\n");
    js.indent();
    js.if_stmt("n > config.retries", |js| {
        js.write_line("return false;");
    })
    .else_if("n === 0", |js| {
        js.write_line("return true;");
    })
    .else_branch(|js| {
        js.write_line("return n % 2 === 0;");
    });
    js.unindent();
    js.write_line("}");

    insta::assert_snapshot!("js_module_file", js.render());
}
