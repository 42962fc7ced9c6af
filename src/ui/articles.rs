/// Latest articles, pulled from the Medium feed on mount

use crate::article_data::{ArticleRecord, FeedState};
use crate::article_ops::{derive_excerpt, resolve_image, sanitize};
use crate::config::FeedConfig;
use crate::feed::fetch_articles;
use crate::ui::components::{ExternalLink, SectionHeading, TagList};
use patternfly_yew::prelude::Spinner;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Articles)]
pub fn articles() -> Html {
    let state = use_state(|| FeedState::NotStarted);
    let config = use_memo((), |_| FeedConfig::default());

    // Fetch once per mount; a result that lands after unmount is dropped by Yew
    {
        let state = state.clone();
        let endpoint = config.endpoint.clone();

        use_effect_with((), move |_| {
            state.set(FeedState::Loading);
            spawn_local(async move {
                let articles = fetch_articles(&endpoint).await;
                state.set(FeedState::from_articles(articles));
            });
            || ()
        });
    }

    html! {
        <section id="articles" class="articles">
            <SectionHeading title="Latest Articles" />

            {match &*state {
                FeedState::NotStarted | FeedState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading articles..."}</p>
                    </div>
                },
                FeedState::LoadedEmpty => html! {
                    <p class="empty-state">{"No articles yet."}</p>
                },
                FeedState::Loaded(articles) => html! {
                    <div class="article-list">
                        {for articles.iter().enumerate().map(|(index, article)| html! {
                            <ArticleCard
                                key={article.display_key(index)}
                                article={article.clone()}
                                config={(*config).clone()}
                            />
                        })}
                    </div>
                },
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ArticleCardProps {
    article: ArticleRecord,
    config: FeedConfig,
}

#[function_component(ArticleCard)]
fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let image = resolve_image(article, &props.config.fallback_image);
    let excerpt = sanitize(&derive_excerpt(&article.body_html, props.config.excerpt_words));
    let categories: Vec<AttrValue> = article.categories.iter().map(|c| AttrValue::from(c.clone())).collect();

    html! {
        <article class="article-card">
            <img class="article-image" src={image} alt={article.title.clone()} loading="lazy" />
            <div class="article-body">
                <h3 class="article-title">{&article.title}</h3>
                <p class="article-date">{article.published_label()}</p>
                <div class="article-excerpt">
                    {Html::from_html_unchecked(AttrValue::from(excerpt))}
                </div>
                <TagList tags={categories} class="article-tags" />
                <ExternalLink href={article.link.clone()} class="read-more">{"Read More"}</ExternalLink>
            </div>
        </article>
    }
}
