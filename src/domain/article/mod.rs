pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート

// model.rsから
pub use model::{Article, ArticleDraft};

// repository.rsから
pub use repository::{
    delete_article_by_id, fetch_all_articles, find_article_by_id, insert_article,
    search_articles_by_keyword, update_article_fields,
};

// service.rsから
pub use service::{
    create_article, delete_article, get_all_articles, get_article_by_id, search_articles,
    update_article,
};
