use swagdoc_core::compile_source;
use swagdoc_core::document::{DocumentTemplate, SpecDocument};

fn main() {
    let source = r#"
        /**
         * Fetch a user.
         * @route GET /users/{id}
         * @group users - User accounts
         * @param {integer} id.path.required - user id
         * @returns {User.model} 200 - The user
         */

        /**
         * @typedef User
         * @property {integer} id.required
         * @property {string} email
         */
    "#;

    match compile_source(source, "example.js") {
        Ok(fragments) => {
            let mut document = SpecDocument::new(DocumentTemplate::new("Example", "1.0.0"));
            document.merge_all(fragments);
            let json_output = document.to_json().unwrap();
            println!("Generated Swagger document:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to compile annotations: {:?}", miette::Report::new(e));
        }
    }
}
