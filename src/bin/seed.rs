use artisan_shop_api::{
    config::AppConfig,
    dto::products::CreateProductRequest,
    services::product_service,
    state::AppState,
    store::Store,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let store = Store::open(&config.data_dir).await?;
    let state = AppState::new(store);

    let created = seed_products(&state).await?;

    println!(
        "Seed completed. {created} products added to {}",
        state.store.products().path().display()
    );
    Ok(())
}

async fn seed_products(state: &AppState) -> anyhow::Result<usize> {
    let products = vec![
        (
            "Silla de raulí",
            "muebles",
            "Don Aurelio Soto",
            "Silla tallada a mano en madera de raulí.",
            "assets/img/silla.jpg",
            45000.0,
            4,
        ),
        (
            "Tabla de cortar de olivo",
            "cocina",
            "Marta Vidal",
            "Tabla de una sola pieza, terminada con aceite mineral.",
            "assets/img/tabla.jpg",
            18000.0,
            12,
        ),
        (
            "Cuenco de lenga",
            "cocina",
            "Marta Vidal",
            "Cuenco torneado, apto para alimentos secos.",
            "assets/img/cuenco.jpg",
            12500.0,
            9,
        ),
        (
            "Caja joyero de alerce",
            "decoracion",
            "Pedro Cárcamo",
            "Caja con tapa corrediza y compartimentos interiores.",
            "assets/img/joyero.jpg",
            22000.0,
            6,
        ),
    ];

    let existing = product_service::list_products(state).await?;
    let mut created = 0;

    for (nombre, categoria, artesano, descripcion, imagen, precio, stock) in products {
        if existing.iter().any(|p| p.nombre == nombre) {
            println!("Skipping {nombre}, already in catalog");
            continue;
        }

        product_service::create_product(
            state,
            CreateProductRequest {
                nombre: Some(nombre.into()),
                precio: Some(precio),
                stock: Some(stock),
                categoria: Some(categoria.into()),
                artesano: Some(artesano.into()),
                descripcion: Some(descripcion.into()),
                imagen: Some(imagen.into()),
            },
        )
        .await?;
        created += 1;
    }

    Ok(created)
}
