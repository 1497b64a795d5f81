use axum::Json;
use serde_json::{Value, json};

/// Static description of the API and its endpoints.
pub async fn info() -> Json<Value> {
    Json(info_document())
}

fn info_document() -> Value {
    let limit_param = |description: &str| {
        json!({
            "name": "limit",
            "description": description,
            "type": "number",
            "required": false,
        })
    };
    let word_param = json!({
        "name": "word",
        "description": "Kata yang ingin dicari artinya.",
        "type": "string",
        "required": true,
    });

    json!({
        "api": {
            "name": "API KBBI IV",
            "description": "API KBBI (Kamus Besar Bahasa Indonesia) versi IV ini digunakan untuk mencari arti kata dalam bahasa Indonesia.",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoint": [
                {
                    "url": "/",
                    "description": "Menampilkan informasi tentang API KBBI IV.",
                    "method": "GET",
                    "params": [],
                },
                {
                    "url": "/words?limit=10",
                    "description": "Menampilkan daftar kata yang tersedia dalam API KBBI IV.",
                    "method": "GET",
                    "params": [limit_param("Batas jumlah kata yang ingin ditampilkan (1-1000, bawaan 100).")],
                },
                {
                    "url": "/randomwords?limit=10",
                    "description": "Menampilkan daftar kata yang tersedia dalam API KBBI IV secara acak.",
                    "method": "GET",
                    "params": [limit_param("Batas jumlah kata yang ingin ditampilkan (1-1000, bawaan 1000).")],
                },
                {
                    "url": "/search?word=kata",
                    "description": "Mencari arti kata dalam bahasa Indonesia.",
                    "method": "GET",
                    "params": [word_param],
                },
                {
                    "url": "/search/{kata}",
                    "description": "Mencari arti kata dalam bahasa Indonesia.",
                    "method": "GET",
                    "params": [{
                        "name": "kata",
                        "description": "Kata yang ingin dicari artinya.",
                        "type": "string",
                        "required": true,
                    }],
                },
            ],
        },
        "author": {
            "name": "Kang Cahya",
            "blog": "https://kang-cahya.com",
            "github": "https://github.com/dyazincahya",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn info_lists_every_endpoint() {
        let Json(doc) = info().await;

        assert_eq!(doc["api"]["name"], "API KBBI IV");
        assert_eq!(doc["api"]["version"], env!("CARGO_PKG_VERSION"));

        let urls: Vec<_> = doc["api"]["endpoint"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["url"].as_str().unwrap())
            .collect();
        assert_eq!(
            urls,
            vec![
                "/",
                "/words?limit=10",
                "/randomwords?limit=10",
                "/search?word=kata",
                "/search/{kata}"
            ]
        );

        assert_eq!(
            doc["author"],
            json!({
                "name": "Kang Cahya",
                "blog": "https://kang-cahya.com",
                "github": "https://github.com/dyazincahya",
            })
        );
    }

    #[test]
    fn info_is_stable_between_calls() {
        assert_eq!(info_document(), info_document());
    }
}
