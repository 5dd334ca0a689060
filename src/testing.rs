//! Testing utilities for srcnav
//!
//! Canned backend payloads shaped like the real symbol and tree endpoints.
//!
//! Only available when compiled with `cfg(test)`.

use serde_json::{Value, json};

/// Symbol-search payload: one overloaded method with three kind records
/// and one class with a single record.
#[must_use]
pub fn symbol_payload() -> Value {
    json!({
        "data": [
            {
                "name": "push_back",
                "hash": "h1",
                "kinds": [
                    {
                        "kind": "CXXMethod",
                        "linkage": 4,
                        "access": 0,
                        "defs": [{"href": "../sources/vec/vector.h.html#L40", "location": "vector.h:40"}],
                        "decls": [{"href": "../sources/vec/vector.h.html#L12", "location": "vector.h:12"}]
                    },
                    {
                        "kind": "CXXMethod",
                        "linkage": 4,
                        "access": 0,
                        "defs": [{"href": "../sources/vec/vector.h.html#L52", "location": "vector.h:52"}],
                        "decls": []
                    },
                    {
                        "kind": "FunctionTemplate",
                        "linkage": 0,
                        "access": 3,
                        "defs": null,
                        "decls": [{"href": "../sources/vec/compat.h.html#L7", "location": "compat.h:7"}]
                    }
                ]
            },
            {
                "name": "Vector",
                "hash": "h2",
                "kinds": [
                    {"kind": "CXXRecord", "linkage": 3, "access": 2, "defs": [], "decls": []}
                ]
            }
        ]
    })
}

/// Tree-search payload: a directory, a file and the project root.
#[must_use]
pub fn file_payload() -> Value {
    json!({
        "data": [
            {"dir": "src", "href": "/v1/sources/src/index.html"},
            {"file": "main.cc", "parent": "src", "href": "/v1/sources/src/main.cc.html"},
            {"href": "/v1/sources/meta/index.html"}
        ]
    })
}
