//! Bootstrap site content.
//!
//! Served until an admin saves the document for the first time, and used
//! field by field as the fallback when stored or submitted content is
//! incomplete.

use super::site_content::{
    DjEvent, SEED_MARKER, SiteContactInfo, SiteContent, SiteImage, SiteMediaEmbed, SiteProfile,
    SiteSocialLinks,
};

fn image(src: &str, alt: &str) -> SiteImage {
    SiteImage {
        src: src.to_string(),
        alt: alt.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Rotating hero images.
#[must_use]
pub fn default_hero_images() -> Vec<SiteImage> {
    vec![
        image("/gallery/real/ana-profile-djanemag.jpeg", "Ana Jones em destaque editorial"),
        image(
            "/gallery/real/ana-zamna-festival.jpeg",
            "Ana Jones em apresentacao no Zamna Festival",
        ),
        image("/gallery/real/ana-dreams-release.jpg", "Capa de lancamento do EP Dreams"),
        image(
            "/gallery/real/ana-avatar-soundcloud.jpg",
            "Foto oficial de artista no SoundCloud",
        ),
        image("/gallery/real/ana-sente-cover.jpg", "Capa digital do single Sente"),
        image(
            "/gallery/real/ana-clubinho-goiania-artwork.png",
            "Arte do set Clubinho Room Ed. Goiania",
        ),
        image(
            "/gallery/real/artworks-MyVfYpeTrDzKDT2m-G36AhA-large.jpg",
            "Techno Connection Radio com Ana Jones",
        ),
        image(
            "/gallery/real/artworks-QAlcAWzmLyqFfcWx-MWgViQ-large.png",
            "Capa ampliada de Sente e Febre",
        ),
    ]
}

/// Gallery images.
#[must_use]
pub fn default_gallery_images() -> Vec<SiteImage> {
    vec![
        image("/gallery/real/ana-profile-djanemag.jpeg", "Ana Jones em destaque editorial"),
        image(
            "/gallery/real/ana-zamna-festival.jpeg",
            "Ana Jones em apresentacao no Zamna Festival",
        ),
        image("/gallery/real/ana-dreams-release.jpg", "Capa de lancamento do EP Dreams"),
        image(
            "/gallery/real/ana-clubinho-goiania-artwork.png",
            "Arte do set Clubinho Room Ed. Goiania",
        ),
        image(
            "/gallery/real/artworks-MyVfYpeTrDzKDT2m-G36AhA-large.jpg",
            "Techno Connection Radio com Ana Jones",
        ),
        image(
            "/gallery/real/artworks-QAlcAWzmLyqFfcWx-MWgViQ-large.png",
            "Capa ampliada de Sente e Febre",
        ),
        image(
            "/gallery/real/ana-avatar-soundcloud.jpg",
            "Foto oficial de artista no SoundCloud",
        ),
        image("/gallery/real/ana-sente-cover.jpg", "Capa digital do single Sente"),
        image("/gallery/real/ana-soundcloud-visual.jpg", "Visual oficial de artista"),
        image(
            "/gallery/real/artworks-MyVfYpeTrDzKDT2m-G36AhA-t1080x1080.jpg",
            "Techno Connection Radio #025",
        ),
        image(
            "/gallery/real/artworks-QAlcAWzmLyqFfcWx-MWgViQ-t1080x1080.png",
            "Kaluts, Ana Jones - Sente/Febre (cover)",
        ),
    ]
}

/// Upcoming events.
#[must_use]
pub fn default_events() -> Vec<DjEvent> {
    vec![
        DjEvent {
            slug: "aniversario-ana-jones-2026".to_string(),
            title: "Aniversario Ana Jones x Heineken".to_string(),
            date_iso: "2026-02-14".to_string(),
            date_label: "14 de fevereiro de 2026".to_string(),
            time_label: "20h ate 05h".to_string(),
            location: "Heineken Stage - Clubinho Room".to_string(),
            city: "Brasilia - DF".to_string(),
            description: "Noite especial de aniversario da Ana Jones com experiencia Heineken, \
                          set extended, convidados da cena local e lista de nomes para o publico."
                .to_string(),
            highlights: lines(&[
                "Edicao especial de aniversario com assinatura Heineken",
                "Set extended da Ana Jones com convidados da Clubinho Room",
                "Experiencia visual e ativacoes de marca durante a noite",
            ]),
            list_rules: lines(&[
                "Lista valida ate 23h00 do dia 14/02.",
                "Nome completo e documento obrigatorios na entrada.",
                "Cada inscricao permite ate 2 acompanhantes.",
            ]),
            cover_image: "/gallery/real/ana-zamna-festival.jpeg".to_string(),
            signup_open: true,
            signup_closed_message: String::new(),
        },
        DjEvent {
            slug: "sunset-clubinho-edition".to_string(),
            title: "Sunset Clubinho Edition".to_string(),
            date_iso: "2026-10-10".to_string(),
            date_label: "10 de outubro de 2026".to_string(),
            time_label: "16h ate 23h".to_string(),
            location: "Rooftop Setor de Clubes".to_string(),
            city: "Brasilia - DF".to_string(),
            description: "Edicao sunset com sonoridade house, melodic e progressive para aquecer \
                          a temporada de primavera."
                .to_string(),
            highlights: lines(&[
                "Set sunset da Ana Jones ao vivo",
                "Experiencia audio premium",
                "Acesso rapido para nomes cadastrados",
            ]),
            list_rules: lines(&[
                "Confirmacao por ordem de inscricao.",
                "Entrada sujeita a lotacao maxima da casa.",
                "Check-in com nome da lista ate 19h30.",
            ]),
            cover_image: "/gallery/real/artworks-MyVfYpeTrDzKDT2m-G36AhA-t1080x1080.jpg"
                .to_string(),
            signup_open: true,
            signup_closed_message: String::new(),
        },
    ]
}

/// Biography copy.
#[must_use]
pub fn default_profile() -> SiteProfile {
    SiteProfile {
        hero_subtitle: "Brasilia • Fundadora Clubinho Room".to_string(),
        hero_bio: "Sonoridade eletronica com identidade autoral, sets energeticos e curadoria de \
                   pista. Ana Jones atua em Brasilia e lidera a cena da Clubinho Room com \
                   experiencias que conectam musica, performance e comunidade."
            .to_string(),
        about_title: "Identidade artistica".to_string(),
        about_paragraph1: "Ana Jones nasceu na cena eletronica de Brasilia e tornou-se referencia \
                           na construcao de atmosferas progressivas e house com personalidade. \
                           Como fundadora da Clubinho Room, ela assina eventos que priorizam \
                           experiencia sonora, comunidade e estetica."
            .to_string(),
        about_paragraph2: "O projeto combina sets de alta energia, curadoria musical consistente \
                           e direcao criativa para marcas, clubs e festivais."
            .to_string(),
        base: "Brasilia - DF".to_string(),
        projeto: "Clubinho Room".to_string(),
        formato: "DJ Set / Live".to_string(),
        booking: "Brasil e Exterior".to_string(),
    }
}

/// Profile links.
#[must_use]
pub fn default_social_links() -> SiteSocialLinks {
    SiteSocialLinks {
        instagram: "https://instagram.com/anajonesdj".to_string(),
        soundcloud: "https://soundcloud.com".to_string(),
        spotify: "https://open.spotify.com/artist/2GuuKuQBZ3AD3opyrL9l8s".to_string(),
        youtube: "https://youtube.com".to_string(),
    }
}

/// Embedded players.
#[must_use]
pub fn default_media_embeds() -> Vec<SiteMediaEmbed> {
    let embed = |title: &str, description: &str, iframe: &str| SiteMediaEmbed {
        title: title.to_string(),
        description: description.to_string(),
        iframe: iframe.to_string(),
    };
    vec![
        embed(
            "SoundCloud",
            "Sets completos e mixtapes da Ana Jones.",
            "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/1969383299\
             &color=%23ff6b35&auto_play=false&hide_related=false&show_comments=false\
             &show_user=true&show_reposts=false",
        ),
        embed(
            "Spotify Oficial",
            "Perfil oficial da Ana Jones no Spotify.",
            "https://open.spotify.com/embed/artist/2GuuKuQBZ3AD3opyrL9l8s?utm_source=generator",
        ),
        embed(
            "Spotify Autorais",
            "Playlist oficial com faixas autorais da Ana Jones.",
            "https://open.spotify.com/embed/playlist/2o4zp84d5ZGI2Hi6S1Ern5?utm_source=generator",
        ),
        embed(
            "Spotify Sonzeira",
            "Curadoria oficial: So pra quem curte sonzeira.",
            "https://open.spotify.com/embed/playlist/5MbO1bL0hz2FkRu0raWWrk?utm_source=generator",
        ),
        embed(
            "YouTube",
            "Shows, lives e registros visuais da pista.",
            "https://www.youtube.com/embed/FlspfN8iHJ0",
        ),
    ]
}

/// Contact details.
#[must_use]
pub fn default_contact_info() -> SiteContactInfo {
    SiteContactInfo {
        email: "booking@anajonesdj.com".to_string(),
        whatsapp: "https://wa.me/5561999999999".to_string(),
        whatsapp_label: "+55 61 99999-9999".to_string(),
        booking_description: "Envie os dados do seu projeto e receba proposta com formato \
                              tecnico, fee e rider."
            .to_string(),
    }
}

/// The complete bootstrap document, stamped [`SEED_MARKER`].
#[must_use]
pub fn default_site_content() -> SiteContent {
    SiteContent {
        hero_images: default_hero_images(),
        gallery_images: default_gallery_images(),
        events: default_events(),
        profile: default_profile(),
        social_links: default_social_links(),
        media_embeds: default_media_embeds(),
        contact_info: default_contact_info(),
        updated_at: SEED_MARKER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn bootstrap_document_is_seed() {
        let content = default_site_content();
        assert!(content.is_seed());
        assert!(!content.hero_images.is_empty());
    }

    #[test]
    fn default_event_slugs_are_unique() {
        let events = default_events();
        let slugs: HashSet<&str> = events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs.len(), events.len());
    }

    #[test]
    fn default_events_accept_signups() {
        assert!(default_events().iter().all(|e| e.signup_open));
    }

    #[test]
    fn soundcloud_embed_url_has_no_whitespace() {
        let embeds = default_media_embeds();
        assert!(embeds.iter().all(|e| !e.iframe.contains(char::is_whitespace)));
    }
}
