// Mirrors the externally managed KBBI IV table. The table has no declared key;
// `word` is named as the primary key only because diesel requires one.

diesel::table! {
    #[sql_name = "api_kbbi_IV"]
    api_kbbi_iv (word) {
        word -> Text,
        arti -> Text,
        #[sql_name = "type"]
        word_type -> Integer,
    }
}
