#![allow(dead_code)]

use artisan_shop_api::{
    models::{Product, SaleLine},
    state::AppState,
    store::Store,
};
use tempfile::TempDir;

/// Keeps the temp dir alive for as long as the state is in use.
pub struct TestShop {
    pub dir: TempDir,
    pub state: AppState,
}

pub async fn shop_with(products: &[Product]) -> anyhow::Result<TestShop> {
    let dir = tempfile::tempdir()?;
    let store = Store::open(dir.path()).await?;
    store.products().save(products).await?;
    Ok(TestShop {
        dir,
        state: AppState::new(store),
    })
}

pub fn product(id: &str, nombre: &str, precio: f64, stock: i64) -> Product {
    Product {
        id: id.into(),
        nombre: nombre.into(),
        precio,
        stock,
        categoria: Some("muebles".into()),
        artesano: Some("Don Aurelio".into()),
        descripcion: None,
        imagen: None,
    }
}

pub fn line(id: &str, cantidad: i64) -> SaleLine {
    SaleLine {
        id: id.into(),
        cantidad,
    }
}

pub async fn stock_of(state: &AppState, id: &str) -> Option<i64> {
    state
        .store
        .products()
        .load()
        .await
        .ok()?
        .into_iter()
        .find(|p| p.id == id)
        .map(|p| p.stock)
}
