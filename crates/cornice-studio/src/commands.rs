use std::io::Read;

use anyhow::{Context, Result};

use cornice_engine::coords::Insets;
use cornice_engine::paint::Color;
use cornice_engine::raster::Canvas;
use cornice_engine::{decorate, CornerRequest};
use cornice_geo::{Endpoints, LocationRecord, MapEmbed, MapView};

use crate::args::{BorderArg, SizeArg};

pub fn profile(options: &str) -> Result<()> {
    let request = CornerRequest::parse(options);
    let profile = request.profile();

    println!("request: {request}");
    println!("effect:  {}", profile.effect());
    println!("layers:  {}", profile.len());
    let values: Vec<String> = profile.iter().map(|w| w.to_string()).collect();
    println!("profile: {}", values.join(" "));
    Ok(())
}

pub struct RenderArgs<'a> {
    pub options: &'a str,
    pub out: &'a str,
    pub size: SizeArg,
    pub padding: i32,
    pub parent: Color,
    pub background: Color,
    pub border: Option<BorderArg>,
    pub fixed_height: bool,
    pub margin: u32,
}

pub fn render(args: &RenderArgs<'_>) -> Result<()> {
    let request = CornerRequest::parse(args.options);

    let mut canvas = Canvas::new(args.size.width, args.size.height)
        .margin(args.margin)
        .padding(Insets::all(args.padding.max(0)))
        .background(args.background)
        .parent_background(Some(args.parent))
        .fixed_height(args.fixed_height);
    if let Some(BorderArg(border)) = args.border {
        canvas = canvas.border(border);
    }

    let bands = decorate(&mut canvas, &request);
    log::info!("`{request}`: {bands} band(s) on a {}x{} box", args.size.width, args.size.height);

    canvas
        .save_png(args.out)
        .with_context(|| format!("failed to write {}", args.out))
}

pub fn map(input: &str, embed: Option<&str>) -> Result<()> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };

    let record = LocationRecord::from_json(&json).context("failed to decode location record")?;
    let embed = match embed {
        Some(base) => MapEmbed::new(base).context("invalid embed base url")?,
        None => MapEmbed::default(),
    };

    match MapView::resolve(&record) {
        Some(view) => log::info!("zoom {} on {:?}", view.zoom, view.query),
        None => log::warn!("record does not resolve to a place, showing fallback view"),
    }
    if let Some(ip) = &record.ip {
        println!("ip:    {ip}");
    }
    println!("metro: {}", record.metro_code_display());
    println!("area:  {}", record.area_code_display());
    println!("{}", embed.url_for(&record));
    Ok(())
}

pub fn lookup_url(base: &str, query: &str) -> Result<()> {
    let endpoints = Endpoints::new(base).context("invalid service base url")?;
    println!("{}", endpoints.lookup_url(query));
    Ok(())
}

pub fn submit_url(base: &str, latitude: f64, longitude: f64) -> Result<()> {
    let endpoints = Endpoints::new(base).context("invalid service base url")?;
    println!("{}", endpoints.submit_url(latitude, longitude));
    Ok(())
}
