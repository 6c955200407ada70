use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// 記事エンティティ（articlesテーブルの1行に対応）
// JSONではフロントエンドに合わせてcamelCaseで表現する
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// 記事の作成・更新リクエストの入力
// idとcreated_atはストア側で採番するため、リクエストに含まれていても無視される
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
}

impl Article {
    /// キーワードがtitleまたはdescriptionに含まれるかを判定する
    /// 大文字小文字は区別しない。空文字はすべての記事に一致する
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: 1,
            title: "Advanced guide".to_string(),
            description: "deep dive".to_string(),
            created_at: "2025-01-02T09:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_article_serializes_to_camel_case() {
        let json = serde_json::to_value(sample_article()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Advanced guide");
        assert!(
            json.get("createdAt").is_some(),
            "created_atはcreatedAtとして出力されるべき: {}",
            json
        );
        assert!(
            json.get("created_at").is_none(),
            "snake_caseのキーは出力されないべき"
        );
    }

    #[test]
    fn test_draft_ignores_server_assigned_fields() {
        // クライアントがidやcreatedAtを送ってきても入力としては無視される
        let json = r#"{
            "id": 999,
            "title": "Intro",
            "description": "Getting started",
            "createdAt": "2000-01-01T00:00:00Z"
        }"#;

        let draft: ArticleDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.title, "Intro");
        assert_eq!(draft.description, "Getting started");
    }

    #[test]
    fn test_matches_keyword() {
        let article = sample_article();

        // 大文字小文字を区別しない部分一致
        assert!(article.matches_keyword("guide"));
        assert!(article.matches_keyword("GUIDE"));
        assert!(article.matches_keyword("deep"));
        // どちらのフィールドにも含まれない
        assert!(!article.matches_keyword("golang"));
        // 空文字はすべてに一致
        assert!(article.matches_keyword(""));

        println!("✅ キーワード判定テスト成功");
    }
}
