//! Canonical example payloads keyed by schema.org type name.
//!
//! Order matters: substring lookups scan this table front to back and take the
//! first hit.

use serde_json::{json, Value};
use std::sync::LazyLock;

/// Type name → example payload, built once and never mutated.
pub(crate) static CANONICAL_TABLE: LazyLock<Vec<(&'static str, Value)>> =
    LazyLock::new(canonical_entries);

fn canonical_entries() -> Vec<(&'static str, Value)> {
    vec![
        // General
        ("Thing", json!({
            "@context": "https://schema.org",
            "@type": "Thing",
            "name": "Example thing",
            "description": "A short description of the thing",
            "url": "https://example.com/thing",
            "image": "https://example.com/thing.jpg"
        })),
        ("Action", json!({
            "@context": "https://schema.org",
            "@type": "Action",
            "name": "Example action",
            "agent": {"@type": "Person", "name": "Jane Doe"},
            "object": {"@type": "Thing", "name": "Example object"}
        })),
        ("SearchAction", json!({
            "@context": "https://schema.org",
            "@type": "SearchAction",
            "target": "https://example.com/search?q={search_term_string}",
            "query-input": "required name=search_term_string"
        })),
        ("BuyAction", json!({
            "@context": "https://schema.org",
            "@type": "BuyAction",
            "object": {"@type": "Product", "name": "Example product"},
            "seller": {"@type": "Organization", "name": "Example Store"}
        })),
        ("ReserveAction", json!({
            "@context": "https://schema.org",
            "@type": "ReserveAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": "https://example.com/reserve",
                "actionPlatform": "https://schema.org/DesktopWebPlatform"
            },
            "result": {"@type": "Reservation", "name": "Table reservation"}
        })),
        ("WatchAction", json!({
            "@context": "https://schema.org",
            "@type": "WatchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": "https://example.com/watch/123"
            }
        })),
        ("OrderAction", json!({
            "@context": "https://schema.org",
            "@type": "OrderAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": "https://example.com/order"
            },
            "deliveryMethod": "https://schema.org/ParcelService"
        })),
        // Creative works
        ("CreativeWork", json!({
            "@context": "https://schema.org",
            "@type": "CreativeWork",
            "name": "Example work",
            "author": {"@type": "Person", "name": "Jane Doe"},
            "datePublished": "2024-01-15",
            "inLanguage": "en"
        })),
        ("Article", json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "Example article headline",
            "description": "Summary of the article",
            "image": "https://example.com/article.jpg",
            "author": {"@type": "Person", "name": "Jane Doe"},
            "publisher": {
                "@type": "Organization",
                "name": "Example Media",
                "logo": {"@type": "ImageObject", "url": "https://example.com/logo.png"}
            },
            "datePublished": "2024-01-15",
            "dateModified": "2024-01-20"
        })),
        ("NewsArticle", json!({
            "@context": "https://schema.org",
            "@type": "NewsArticle",
            "headline": "Example news headline",
            "image": ["https://example.com/news-1x1.jpg", "https://example.com/news-16x9.jpg"],
            "datePublished": "2024-01-15T08:00:00+00:00",
            "dateModified": "2024-01-15T09:20:00+00:00",
            "author": [{"@type": "Person", "name": "Jane Doe", "url": "https://example.com/jane"}]
        })),
        ("BlogPosting", json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": "Example blog post",
            "author": {"@type": "Person", "name": "Jane Doe"},
            "datePublished": "2024-01-15",
            "mainEntityOfPage": {"@type": "WebPage", "@id": "https://example.com/blog/post"}
        })),
        ("TechArticle", json!({
            "@context": "https://schema.org",
            "@type": "TechArticle",
            "headline": "How to configure the example service",
            "proficiencyLevel": "Beginner",
            "dependencies": "Example SDK 2.0",
            "author": {"@type": "Person", "name": "Jane Doe"}
        })),
        ("ScholarlyArticle", json!({
            "@context": "https://schema.org",
            "@type": "ScholarlyArticle",
            "headline": "An example study",
            "author": {"@type": "Person", "name": "Dr. Jane Doe"},
            "datePublished": "2024-01-15",
            "isPartOf": {"@type": "Periodical", "name": "Journal of Examples"}
        })),
        ("Report", json!({
            "@context": "https://schema.org",
            "@type": "Report",
            "name": "Annual report 2024",
            "reportNumber": "2024-01",
            "publisher": {"@type": "Organization", "name": "Example Inc."}
        })),
        ("Blog", json!({
            "@context": "https://schema.org",
            "@type": "Blog",
            "name": "Example blog",
            "url": "https://example.com/blog",
            "publisher": {"@type": "Organization", "name": "Example Inc."}
        })),
        ("Book", json!({
            "@context": "https://schema.org",
            "@type": "Book",
            "name": "Example book",
            "author": {"@type": "Person", "name": "Jane Doe"},
            "isbn": "978-3-16-148410-0",
            "numberOfPages": 320,
            "bookFormat": "https://schema.org/Hardcover"
        })),
        ("Course", json!({
            "@context": "https://schema.org",
            "@type": "Course",
            "name": "Introduction to examples",
            "description": "Learn the basics of examples",
            "provider": {"@type": "Organization", "name": "Example Academy", "sameAs": "https://example.com"}
        })),
        ("Dataset", json!({
            "@context": "https://schema.org",
            "@type": "Dataset",
            "name": "Example dataset",
            "description": "Measurements collected for the example project",
            "license": "https://creativecommons.org/licenses/by/4.0/",
            "creator": {"@type": "Organization", "name": "Example Lab"}
        })),
        ("Recipe", json!({
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Example pancakes",
            "image": "https://example.com/pancakes.jpg",
            "author": {"@type": "Person", "name": "Jane Doe"},
            "prepTime": "PT10M",
            "cookTime": "PT20M",
            "recipeYield": "4 servings",
            "recipeIngredient": ["2 eggs", "250 g flour", "500 ml milk"],
            "recipeInstructions": [
                {"@type": "HowToStep", "text": "Mix the ingredients."},
                {"@type": "HowToStep", "text": "Cook on a hot pan."}
            ]
        })),
        ("HowTo", json!({
            "@context": "https://schema.org",
            "@type": "HowTo",
            "name": "How to tie a tie",
            "totalTime": "PT5M",
            "step": [
                {"@type": "HowToStep", "name": "Drape", "text": "Drape the tie around your neck."},
                {"@type": "HowToStep", "name": "Cross", "text": "Cross the wide end over the narrow end."}
            ]
        })),
        ("HowToStep", json!({
            "@context": "https://schema.org",
            "@type": "HowToStep",
            "name": "Step 1",
            "text": "Do the first thing.",
            "url": "https://example.com/how-to#step1"
        })),
        ("HowToSection", json!({
            "@context": "https://schema.org",
            "@type": "HowToSection",
            "name": "Preparation",
            "itemListElement": [{"@type": "HowToStep", "text": "Gather the tools."}]
        })),
        ("Movie", json!({
            "@context": "https://schema.org",
            "@type": "Movie",
            "name": "Example movie",
            "director": {"@type": "Person", "name": "John Doe"},
            "dateCreated": "2023-05-01",
            "image": "https://example.com/poster.jpg"
        })),
        ("TVSeries", json!({
            "@context": "https://schema.org",
            "@type": "TVSeries",
            "name": "Example series",
            "numberOfSeasons": 3,
            "actor": [{"@type": "Person", "name": "Jane Doe"}]
        })),
        ("MusicRecording", json!({
            "@context": "https://schema.org",
            "@type": "MusicRecording",
            "name": "Example song",
            "byArtist": {"@type": "MusicGroup", "name": "The Examples"},
            "duration": "PT3M45S",
            "inAlbum": {"@type": "MusicAlbum", "name": "Example album"}
        })),
        ("MusicAlbum", json!({
            "@context": "https://schema.org",
            "@type": "MusicAlbum",
            "name": "Example album",
            "byArtist": {"@type": "MusicGroup", "name": "The Examples"},
            "numTracks": 12
        })),
        ("MusicPlaylist", json!({
            "@context": "https://schema.org",
            "@type": "MusicPlaylist",
            "name": "Example playlist",
            "numTracks": 2,
            "track": [
                {"@type": "MusicRecording", "name": "Song one"},
                {"@type": "MusicRecording", "name": "Song two"}
            ]
        })),
        ("Podcast", json!({
            "@context": "https://schema.org",
            "@type": "PodcastSeries",
            "name": "Example podcast",
            "url": "https://example.com/podcast",
            "webFeed": "https://example.com/podcast/feed.xml"
        })),
        ("PodcastEpisode", json!({
            "@context": "https://schema.org",
            "@type": "PodcastEpisode",
            "name": "Episode 1",
            "datePublished": "2024-01-15",
            "partOfSeries": {"@type": "PodcastSeries", "name": "Example podcast"}
        })),
        ("MediaObject", json!({
            "@context": "https://schema.org",
            "@type": "MediaObject",
            "name": "Example media",
            "contentUrl": "https://example.com/media.bin",
            "encodingFormat": "application/octet-stream"
        })),
        ("ImageObject", json!({
            "@context": "https://schema.org",
            "@type": "ImageObject",
            "contentUrl": "https://example.com/photo.jpg",
            "caption": "Example photo",
            "width": 1200,
            "height": 630
        })),
        ("Photograph", json!({
            "@context": "https://schema.org",
            "@type": "Photograph",
            "name": "Example photograph",
            "creator": {"@type": "Person", "name": "Jane Doe"},
            "image": "https://example.com/photo.jpg"
        })),
        ("VideoObject", json!({
            "@context": "https://schema.org",
            "@type": "VideoObject",
            "name": "Example video",
            "description": "What the video is about",
            "thumbnailUrl": "https://example.com/thumb.jpg",
            "uploadDate": "2024-01-15T08:00:00+00:00",
            "duration": "PT1M54S",
            "contentUrl": "https://example.com/video.mp4"
        })),
        ("AudioObject", json!({
            "@context": "https://schema.org",
            "@type": "AudioObject",
            "name": "Example audio",
            "contentUrl": "https://example.com/audio.mp3",
            "encodingFormat": "audio/mpeg",
            "duration": "PT4M"
        })),
        ("SoftwareApplication", json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": "Example app",
            "operatingSystem": "Windows, macOS",
            "applicationCategory": "BusinessApplication",
            "offers": {"@type": "Offer", "price": "0", "priceCurrency": "USD"},
            "aggregateRating": {"@type": "AggregateRating", "ratingValue": "4.6", "ratingCount": "8864"}
        })),
        ("MobileApplication", json!({
            "@context": "https://schema.org",
            "@type": "MobileApplication",
            "name": "Example mobile app",
            "operatingSystem": "Android",
            "applicationCategory": "GameApplication",
            "offers": {"@type": "Offer", "price": "0", "priceCurrency": "USD"}
        })),
        ("WebApplication", json!({
            "@context": "https://schema.org",
            "@type": "WebApplication",
            "name": "Example web app",
            "browserRequirements": "Requires JavaScript",
            "applicationCategory": "UtilitiesApplication"
        })),
        ("VideoGame", json!({
            "@context": "https://schema.org",
            "@type": "VideoGame",
            "name": "Example game",
            "gamePlatform": ["PC", "Console"],
            "genre": "Adventure"
        })),
        // Web pages and navigation
        ("WebPage", json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "name": "Example page",
            "description": "What this page is about",
            "url": "https://example.com/page",
            "inLanguage": "en",
            "isPartOf": {"@type": "WebSite", "name": "Example", "url": "https://example.com"}
        })),
        ("WebSite", json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": "Example",
            "url": "https://example.com",
            "potentialAction": {
                "@type": "SearchAction",
                "target": "https://example.com/search?q={search_term_string}",
                "query-input": "required name=search_term_string"
            }
        })),
        ("AboutPage", json!({
            "@context": "https://schema.org",
            "@type": "AboutPage",
            "name": "About us",
            "url": "https://example.com/about",
            "mainEntity": {"@type": "Organization", "name": "Example Inc."}
        })),
        ("ContactPage", json!({
            "@context": "https://schema.org",
            "@type": "ContactPage",
            "name": "Contact",
            "url": "https://example.com/contact",
            "mainEntity": {
                "@type": "Organization",
                "name": "Example Inc.",
                "contactPoint": {"@type": "ContactPoint", "telephone": "+1-555-0100", "contactType": "customer service"}
            }
        })),
        ("FAQPage", json!({
            "@context": "https://schema.org",
            "@type": "FAQPage",
            "mainEntity": [
                {
                    "@type": "Question",
                    "name": "What is an example question?",
                    "acceptedAnswer": {"@type": "Answer", "text": "This is an example answer."}
                },
                {
                    "@type": "Question",
                    "name": "How long does delivery take?",
                    "acceptedAnswer": {"@type": "Answer", "text": "Delivery takes 2 to 4 business days."}
                }
            ]
        })),
        ("QAPage", json!({
            "@context": "https://schema.org",
            "@type": "QAPage",
            "mainEntity": {
                "@type": "Question",
                "name": "How do I reset my password?",
                "answerCount": 1,
                "acceptedAnswer": {"@type": "Answer", "text": "Use the reset link on the login page.", "upvoteCount": 12}
            }
        })),
        ("Question", json!({
            "@context": "https://schema.org",
            "@type": "Question",
            "name": "What is an example question?",
            "acceptedAnswer": {"@type": "Answer", "text": "This is an example answer."}
        })),
        ("Answer", json!({
            "@context": "https://schema.org",
            "@type": "Answer",
            "text": "This is an example answer.",
            "upvoteCount": 3,
            "author": {"@type": "Person", "name": "Jane Doe"}
        })),
        ("CollectionPage", json!({
            "@context": "https://schema.org",
            "@type": "CollectionPage",
            "name": "Example collection",
            "url": "https://example.com/collection",
            "hasPart": [{"@type": "CreativeWork", "name": "Item one"}]
        })),
        ("ItemPage", json!({
            "@context": "https://schema.org",
            "@type": "ItemPage",
            "name": "Example item",
            "mainEntity": {"@type": "Product", "name": "Example product"}
        })),
        ("ProfilePage", json!({
            "@context": "https://schema.org",
            "@type": "ProfilePage",
            "dateCreated": "2024-01-15T08:00:00+00:00",
            "mainEntity": {"@type": "Person", "name": "Jane Doe", "identifier": "123"}
        })),
        ("SearchResultsPage", json!({
            "@context": "https://schema.org",
            "@type": "SearchResultsPage",
            "name": "Search results for example",
            "url": "https://example.com/search?q=example"
        })),
        ("CheckoutPage", json!({
            "@context": "https://schema.org",
            "@type": "CheckoutPage",
            "name": "Checkout",
            "url": "https://example.com/checkout"
        })),
        ("BreadcrumbList", json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": [
                {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://example.com"},
                {"@type": "ListItem", "position": 2, "name": "Category", "item": "https://example.com/category"}
            ]
        })),
        ("ItemList", json!({
            "@context": "https://schema.org",
            "@type": "ItemList",
            "itemListElement": [
                {"@type": "ListItem", "position": 1, "url": "https://example.com/item-1"},
                {"@type": "ListItem", "position": 2, "url": "https://example.com/item-2"}
            ]
        })),
        ("ListItem", json!({
            "@context": "https://schema.org",
            "@type": "ListItem",
            "position": 1,
            "name": "First item",
            "item": "https://example.com/item-1"
        })),
        ("SiteNavigationElement", json!({
            "@context": "https://schema.org",
            "@type": "SiteNavigationElement",
            "name": ["Home", "Products", "Contact"],
            "url": ["https://example.com", "https://example.com/products", "https://example.com/contact"]
        })),
        ("WPHeader", json!({
            "@context": "https://schema.org",
            "@type": "WPHeader",
            "name": "Site header",
            "description": "Logo and main navigation"
        })),
        ("WPFooter", json!({
            "@context": "https://schema.org",
            "@type": "WPFooter",
            "copyrightYear": "2024",
            "copyrightHolder": {"@type": "Organization", "name": "Example Inc."}
        })),
        // Events
        ("Event", json!({
            "@context": "https://schema.org",
            "@type": "Event",
            "name": "Example event",
            "startDate": "2025-07-21T19:00:00-05:00",
            "endDate": "2025-07-21T23:00:00-05:00",
            "eventStatus": "https://schema.org/EventScheduled",
            "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
            "location": {
                "@type": "Place",
                "name": "Example Hall",
                "address": {"@type": "PostalAddress", "streetAddress": "100 Main St", "addressLocality": "Springfield", "addressCountry": "US"}
            },
            "offers": {"@type": "Offer", "price": "30", "priceCurrency": "USD", "availability": "https://schema.org/InStock", "url": "https://example.com/tickets"},
            "organizer": {"@type": "Organization", "name": "Example Events", "url": "https://example.com"}
        })),
        ("BusinessEvent", json!({
            "@context": "https://schema.org",
            "@type": "BusinessEvent",
            "name": "Example conference",
            "startDate": "2025-09-10",
            "location": {"@type": "Place", "name": "Convention Center"}
        })),
        ("MusicEvent", json!({
            "@context": "https://schema.org",
            "@type": "MusicEvent",
            "name": "Example concert",
            "startDate": "2025-07-21T20:00",
            "location": {"@type": "MusicVenue", "name": "Example Arena"},
            "performer": {"@type": "MusicGroup", "name": "The Examples"}
        })),
        ("SportsEvent", json!({
            "@context": "https://schema.org",
            "@type": "SportsEvent",
            "name": "Example match",
            "startDate": "2025-08-02T15:00",
            "homeTeam": {"@type": "SportsTeam", "name": "Home FC"},
            "awayTeam": {"@type": "SportsTeam", "name": "Away FC"},
            "location": {"@type": "StadiumOrArena", "name": "Example Stadium"}
        })),
        ("Festival", json!({
            "@context": "https://schema.org",
            "@type": "Festival",
            "name": "Example festival",
            "startDate": "2025-06-01",
            "endDate": "2025-06-03",
            "location": {"@type": "Place", "name": "City Park"}
        })),
        ("EducationEvent", json!({
            "@context": "https://schema.org",
            "@type": "EducationEvent",
            "name": "Example workshop",
            "startDate": "2025-03-12T09:00",
            "educationalLevel": "Beginner",
            "location": {"@type": "Place", "name": "Room 101"}
        })),
        ("ExhibitionEvent", json!({
            "@context": "https://schema.org",
            "@type": "ExhibitionEvent",
            "name": "Example exhibition",
            "startDate": "2025-04-01",
            "endDate": "2025-06-30",
            "location": {"@type": "Museum", "name": "Example Museum"}
        })),
        ("FoodEvent", json!({
            "@context": "https://schema.org",
            "@type": "FoodEvent",
            "name": "Example tasting",
            "startDate": "2025-05-18T18:00",
            "location": {"@type": "Restaurant", "name": "Example Bistro"}
        })),
        ("TheaterEvent", json!({
            "@context": "https://schema.org",
            "@type": "TheaterEvent",
            "name": "Example play",
            "startDate": "2025-10-04T19:30",
            "location": {"@type": "PerformingArtsTheater", "name": "Example Theater"}
        })),
        ("ScreeningEvent", json!({
            "@context": "https://schema.org",
            "@type": "ScreeningEvent",
            "name": "Example screening",
            "startDate": "2025-11-20T21:00",
            "workPresented": {"@type": "Movie", "name": "Example movie"},
            "location": {"@type": "MovieTheater", "name": "Example Cinema"}
        })),
        ("SaleEvent", json!({
            "@context": "https://schema.org",
            "@type": "SaleEvent",
            "name": "Example summer sale",
            "startDate": "2025-07-01",
            "endDate": "2025-07-15",
            "location": {"@type": "Place", "name": "Example Store"}
        })),
        // Organizations, people, places
        ("Organization", json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Example Inc.",
            "url": "https://example.com",
            "logo": "https://example.com/logo.png",
            "sameAs": ["https://www.facebook.com/example", "https://www.linkedin.com/company/example"],
            "contactPoint": {"@type": "ContactPoint", "telephone": "+1-555-0100", "contactType": "customer service"}
        })),
        ("Corporation", json!({
            "@context": "https://schema.org",
            "@type": "Corporation",
            "name": "Example Corp.",
            "tickerSymbol": "EXMP",
            "url": "https://example.com"
        })),
        ("LocalBusiness", json!({
            "@context": "https://schema.org",
            "@type": "LocalBusiness",
            "name": "Example Shop",
            "image": "https://example.com/shop.jpg",
            "telephone": "+1-555-0100",
            "priceRange": "$$",
            "address": {
                "@type": "PostalAddress",
                "streetAddress": "100 Main St",
                "addressLocality": "Springfield",
                "postalCode": "12345",
                "addressCountry": "US"
            },
            "geo": {"@type": "GeoCoordinates", "latitude": 40.7128, "longitude": -74.006},
            "openingHoursSpecification": [{
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "09:00",
                "closes": "18:00"
            }]
        })),
        ("Restaurant", json!({
            "@context": "https://schema.org",
            "@type": "Restaurant",
            "name": "Example Bistro",
            "servesCuisine": "French",
            "priceRange": "$$",
            "acceptsReservations": "True",
            "menu": "https://example.com/menu",
            "address": {"@type": "PostalAddress", "streetAddress": "1 Market Sq", "addressLocality": "Springfield"}
        })),
        ("Store", json!({
            "@context": "https://schema.org",
            "@type": "Store",
            "name": "Example Store",
            "openingHours": "Mo-Sa 09:00-19:00",
            "address": {"@type": "PostalAddress", "streetAddress": "5 High St", "addressLocality": "Springfield"}
        })),
        ("Hotel", json!({
            "@context": "https://schema.org",
            "@type": "Hotel",
            "name": "Example Hotel",
            "starRating": {"@type": "Rating", "ratingValue": "4"},
            "checkinTime": "15:00",
            "checkoutTime": "11:00",
            "address": {"@type": "PostalAddress", "streetAddress": "10 Ocean Dr", "addressLocality": "Springfield"}
        })),
        ("MedicalOrganization", json!({
            "@context": "https://schema.org",
            "@type": "MedicalOrganization",
            "name": "Example Clinic",
            "medicalSpecialty": "Dermatology",
            "telephone": "+1-555-0101"
        })),
        ("EducationalOrganization", json!({
            "@context": "https://schema.org",
            "@type": "EducationalOrganization",
            "name": "Example University",
            "url": "https://example.edu",
            "alumni": {"@type": "Person", "name": "Jane Doe"}
        })),
        ("NGO", json!({
            "@context": "https://schema.org",
            "@type": "NGO",
            "name": "Example Foundation",
            "url": "https://example.org",
            "nonprofitStatus": "Nonprofit501c3"
        })),
        ("Person", json!({
            "@context": "https://schema.org",
            "@type": "Person",
            "name": "Jane Doe",
            "jobTitle": "Editor",
            "url": "https://example.com/jane",
            "image": "https://example.com/jane.jpg",
            "sameAs": ["https://twitter.com/janedoe"],
            "worksFor": {"@type": "Organization", "name": "Example Inc."}
        })),
        ("Place", json!({
            "@context": "https://schema.org",
            "@type": "Place",
            "name": "Example Place",
            "address": {"@type": "PostalAddress", "addressLocality": "Springfield", "addressCountry": "US"},
            "geo": {"@type": "GeoCoordinates", "latitude": 40.7128, "longitude": -74.006}
        })),
        ("PostalAddress", json!({
            "@context": "https://schema.org",
            "@type": "PostalAddress",
            "streetAddress": "100 Main St",
            "addressLocality": "Springfield",
            "addressRegion": "IL",
            "postalCode": "12345",
            "addressCountry": "US"
        })),
        ("GeoCoordinates", json!({
            "@context": "https://schema.org",
            "@type": "GeoCoordinates",
            "latitude": 40.7128,
            "longitude": -74.006
        })),
        ("ContactPoint", json!({
            "@context": "https://schema.org",
            "@type": "ContactPoint",
            "telephone": "+1-555-0100",
            "contactType": "customer service",
            "areaServed": "US",
            "availableLanguage": ["English", "French"]
        })),
        // Commerce
        ("Product", json!({
            "@context": "https://schema.org",
            "@type": "Product",
            "name": "Example product",
            "image": "https://example.com/product.jpg",
            "description": "What the product does",
            "sku": "EX-001",
            "brand": {"@type": "Brand", "name": "Example"},
            "offers": {
                "@type": "Offer",
                "url": "https://example.com/product",
                "priceCurrency": "USD",
                "price": "19.99",
                "availability": "https://schema.org/InStock"
            },
            "aggregateRating": {"@type": "AggregateRating", "ratingValue": "4.4", "reviewCount": "89"}
        })),
        ("Offer", json!({
            "@context": "https://schema.org",
            "@type": "Offer",
            "price": "19.99",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
            "url": "https://example.com/product",
            "priceValidUntil": "2025-12-31"
        })),
        ("AggregateOffer", json!({
            "@context": "https://schema.org",
            "@type": "AggregateOffer",
            "lowPrice": "9.99",
            "highPrice": "49.99",
            "priceCurrency": "USD",
            "offerCount": "5"
        })),
        ("Review", json!({
            "@context": "https://schema.org",
            "@type": "Review",
            "itemReviewed": {"@type": "Product", "name": "Example product"},
            "reviewRating": {"@type": "Rating", "ratingValue": "4", "bestRating": "5"},
            "author": {"@type": "Person", "name": "Jane Doe"},
            "reviewBody": "Works as described."
        })),
        ("AggregateRating", json!({
            "@context": "https://schema.org",
            "@type": "AggregateRating",
            "itemReviewed": {"@type": "Product", "name": "Example product"},
            "ratingValue": "4.4",
            "bestRating": "5",
            "ratingCount": "89"
        })),
        ("Rating", json!({
            "@context": "https://schema.org",
            "@type": "Rating",
            "ratingValue": "4",
            "bestRating": "5",
            "worstRating": "1"
        })),
        ("Brand", json!({
            "@context": "https://schema.org",
            "@type": "Brand",
            "name": "Example",
            "logo": "https://example.com/brand-logo.png"
        })),
        ("Service", json!({
            "@context": "https://schema.org",
            "@type": "Service",
            "name": "Example consulting",
            "serviceType": "Consulting",
            "provider": {"@type": "Organization", "name": "Example Inc."},
            "areaServed": "US"
        })),
        ("JobPosting", json!({
            "@context": "https://schema.org",
            "@type": "JobPosting",
            "title": "Software engineer",
            "description": "<p>Build example software.</p>",
            "datePosted": "2024-01-15",
            "validThrough": "2024-03-15T00:00",
            "employmentType": "FULL_TIME",
            "hiringOrganization": {"@type": "Organization", "name": "Example Inc.", "sameAs": "https://example.com"},
            "jobLocation": {
                "@type": "Place",
                "address": {"@type": "PostalAddress", "addressLocality": "Springfield", "addressCountry": "US"}
            }
        })),
        ("Vehicle", json!({
            "@context": "https://schema.org",
            "@type": "Vehicle",
            "name": "Example car",
            "vehicleIdentificationNumber": "1HGCM82633A004352",
            "brand": {"@type": "Brand", "name": "Example Motors"},
            "mileageFromOdometer": {"@type": "QuantitativeValue", "value": "12000", "unitCode": "KMT"}
        })),
        ("Reservation", json!({
            "@context": "https://schema.org",
            "@type": "Reservation",
            "reservationNumber": "ABC123",
            "reservationStatus": "https://schema.org/ReservationConfirmed",
            "underName": {"@type": "Person", "name": "Jane Doe"}
        })),
        // Meta-tag formats mapped onto WebPage-shaped examples
        ("OpenGraph", json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "name": "Page title (og:title)",
            "description": "Page summary (og:description)",
            "url": "https://example.com/page",
            "image": "https://example.com/share.jpg"
        })),
        ("TwitterCard", json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "name": "Page title (twitter:title)",
            "description": "Page summary (twitter:description)",
            "image": "https://example.com/card.jpg"
        })),
        ("MetaTags", json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "name": "Page title",
            "description": "Meta description of the page",
            "keywords": "example, keywords"
        })),
    ]
}
