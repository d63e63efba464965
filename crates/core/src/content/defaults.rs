//! Static default payloads, served when a slug has never been written.
//!
//! The public pages render these until an editor saves live content for
//! the slug; they satisfy the same invariants as persisted payloads, so
//! editors and renderers never need to know which one they were given.

use super::model::{
    AboutContent, BrowserLink, BusinessHours, ContactInfo, ContentPayload, CookiePolicyContent,
    CookieType, FaqItem, PolicySection, PolicySubsection, ProcessSteps, ShippingItem, SocialLinks,
};
use super::slug::ContentSlug;

/// The default payload for a slug, structurally valid for its variant.
pub fn payload(slug: ContentSlug) -> ContentPayload {
    match slug {
        ContentSlug::ShippingDelivery => ContentPayload::Shipping(shipping_info()),
        ContentSlug::ReturnPolicy => ContentPayload::Policy(return_policy_sections()),
        ContentSlug::PrivacyPolicy => ContentPayload::Policy(privacy_policy_sections()),
        ContentSlug::Faq => ContentPayload::Faq(faq_items()),
        ContentSlug::CookiePolicy => ContentPayload::CookiePolicy(CookiePolicyContent {
            sections: cookie_policy_sections(),
            cookie_types: cookie_types(),
        }),
        ContentSlug::ContactUs => ContentPayload::Contact(contact_info()),
        ContentSlug::AboutUs => ContentPayload::About(about_content()),
    }
}

fn section(id: i64, title: &str, icon: &str, content: &str) -> PolicySection {
    PolicySection {
        id,
        title: title.to_string(),
        icon: Some(icon.to_string()),
        content: content.to_string(),
        list: None,
        note: None,
        warning: None,
        subsections: None,
        browsers: None,
        process: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn shipping_item(id: i64, title: &str, icon: &str, content: &str) -> ShippingItem {
    ShippingItem {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        content: content.to_string(),
    }
}

pub fn shipping_info() -> Vec<ShippingItem> {
    vec![
        shipping_item(1, "Order Placement", "🛒", "When you find a product you like on Smart Wear, simply click the link to be redirected to Amazon's official product page. There, you can review all purchase details — including shipping options, estimated delivery dates, and seller ratings — before completing your order securely on Amazon."),
        shipping_item(2, "Shipping Responsibility", "📦", "Once you complete your order on Amazon, all shipping, packaging, and delivery will be handled by Amazon or the Amazon-verified seller. Smart Wear does not store, ship, or process any products."),
        shipping_item(3, "Delivery Timeframes", "⏱️", "Delivery times vary depending on several factors: The seller's location and shipping method, your delivery address or region, the availability of the product, and whether you're an Amazon Prime member. Estimated delivery times will always be displayed on the product's Amazon page before checkout."),
        shipping_item(4, "Tracking Your Order", "📍", "Once you place your order on Amazon, you can easily track your shipment through your Amazon account. Amazon provides real-time updates, including dispatch confirmation, carrier details, and estimated delivery times."),
        shipping_item(5, "Shipping Costs", "💰", "Shipping costs are determined by Amazon or the product's seller. These may vary depending on your location, delivery speed, and product size or weight. For most Prime-eligible items, free shipping is available for Prime members."),
        shipping_item(6, "Delays & Delivery Issues", "⚠️", "If your order is delayed, damaged, or lost in transit, please contact Amazon Customer Service directly. They provide dedicated support to resolve such issues quickly. Smart Wear has no control over Amazon's delivery operations but will gladly help direct you to the correct support resources."),
        shipping_item(7, "International Shipping", "🌍", "Many Amazon sellers offer international delivery. If you're shopping from outside your country, check the product page for availability and shipping eligibility to your region."),
        shipping_item(8, "Our Role", "🎯", "Smart Wear acts solely as an affiliate partner that helps users discover and compare stylish T-shirts conveniently in one place. We do not intervene in the transaction or fulfillment process — your purchase agreement is strictly between you and Amazon (or the Amazon seller)."),
    ]
}

fn faq_item(id: i64, question: &str, icon: &str, answer: &str) -> FaqItem {
    FaqItem {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        icon: icon.to_string(),
    }
}

pub fn faq_items() -> Vec<FaqItem> {
    vec![
        faq_item(1, "What is Smart Wear?", "👕", "Smart Wear is an online platform where you can explore a curated selection of stylish, high-quality T-shirts and apparel. We make it easy for you to find trendy and comfortable clothing by linking directly to products available on Amazon. When you find something you like, you'll be redirected to Amazon to complete your purchase securely."),
        faq_item(2, "Do you sell the products directly?", "🏪", "No. Smart Wear does not sell or ship products directly. We are an affiliate-based website, meaning we feature and recommend products available on Amazon. When you click on a product link, you'll be taken to the official Amazon product page to place your order."),
        faq_item(3, "How does ordering work?", "🛒", "Simply browse the products on Smart Wear, click on the one you like, and you'll be redirected to Amazon. From there, you can add the product to your cart and complete your purchase through Amazon's secure checkout process."),
        faq_item(4, "Who handles shipping and delivery?", "🚚", "All shipping, delivery, and tracking are handled directly by Amazon or the respective Amazon seller. Delivery times and fees may vary depending on your location, the seller's shipping policy, and your chosen shipping option."),
        faq_item(5, "Can I return or exchange a product I bought through Smart Wear?", "🔄", "Since all purchases are made on Amazon, returns and exchanges must follow Amazon's Return Policy. You can easily initiate a return through your Amazon account under the 'Your Orders' section."),
        faq_item(6, "How long does delivery take?", "⏱️", "Delivery times depend on the seller and your location. When you view a product on Amazon, you'll see an estimated delivery date before placing your order. Prime members may also enjoy faster, free delivery on eligible items."),
        faq_item(7, "Are the prices the same as on Amazon?", "💰", "Yes. The prices shown on Smart Wear reflect the current prices listed on Amazon. However, prices and availability can change at any time based on Amazon's updates or seller adjustments."),
        faq_item(8, "Do you earn a commission from Amazon?", "💳", "Yes, Smart Wear may earn a small affiliate commission when you make a purchase through our product links. This helps us maintain the website and continue providing curated product recommendations — at no extra cost to you."),
        faq_item(9, "Is my personal information safe?", "🔒", "Absolutely. We do not collect any payment information or personal details related to your purchases. All transactions take place securely on Amazon's official website. We may collect basic browsing data to improve your experience, as outlined in our Privacy Policy."),
        faq_item(10, "How can I contact Smart Wear?", "📞", "If you have questions, suggestions, or issues related to our website, please reach out to us through the Contact Us page. While we can't assist with specific Amazon orders, we're happy to guide you or provide information about our featured products."),
    ]
}

pub fn return_policy_sections() -> Vec<PolicySection> {
    vec![
        PolicySection {
            list: Some(strings(&[
                "Your order is processed entirely through Amazon's secure checkout system",
                "Shipping, delivery, returns, and refunds are managed by Amazon or the seller",
                "Smart Wear does not store payment details or manage order fulfillment",
            ])),
            ..section(1, "Amazon Handles All Orders", "📦", "When you click a product link on Smart Wear and make a purchase on Amazon:")
        },
        PolicySection {
            list: Some(strings(&[
                "The seller's individual return policy",
                "The product type and condition",
                "Your location and delivery method",
            ])),
            process: Some(ProcessSteps {
                title: "To initiate a return:".to_string(),
                steps: strings(&[
                    "Log in to your Amazon account",
                    "Go to Your Orders",
                    "Select the product you want to return",
                    "Follow Amazon's on-screen instructions to complete the return or exchange request",
                ]),
            }),
            note: Some("Amazon provides detailed instructions, shipping labels (if applicable), and estimated timelines for receiving your refund or replacement.".to_string()),
            ..section(2, "Returns and Exchanges", "🔄", "All requests for returns, exchanges, or refunds must be submitted directly through Amazon. The process may vary depending on:")
        },
        PolicySection {
            list: Some(strings(&[
                "The seller's stated policy for the product",
                "Condition of the item (e.g., unused, undamaged, original packaging)",
                "Timing of your return request",
            ])),
            note: Some("Please review the product's Amazon listing for the most accurate and up-to-date return eligibility information.".to_string()),
            ..section(3, "Return Eligibility", "✅", "Return eligibility depends on:")
        },
        PolicySection {
            warning: Some("Smart Wear does not handle, process, or guarantee refunds, as all transactions occur on Amazon.".to_string()),
            ..section(4, "Refunds", "💰", "Refunds are issued directly by Amazon to your original payment method. The time it takes to receive a refund depends on Amazon's processing time and your financial institution.")
        },
        PolicySection {
            list: Some(strings(&[
                "Contact Amazon Customer Service immediately",
                "They will guide you through the return, replacement, or refund process",
            ])),
            warning: Some("Smart Wear cannot replace or refund items directly.".to_string()),
            ..section(5, "Damaged or Incorrect Products", "⚠️", "If you receive a product that is damaged, defective, or not as described:")
        },
        section(6, "International Orders", "🌍", "For international purchases, returns and refunds are subject to the seller's policies and Amazon's shipping rules. Delivery times, return procedures, and shipping fees may vary by country."),
        PolicySection {
            note: Some("For any questions regarding Amazon orders, shipping, or returns, please contact Amazon Customer Service or consult your order details in your Amazon account.".to_string()),
            ..section(7, "Smart Wear's Role", "🎯", "Smart Wear acts solely as a product discovery platform and affiliate partner. We are committed to helping you find high-quality T-shirts easily, but we do not manage orders, shipments, or returns.")
        },
        PolicySection {
            note: Some("While we cannot process returns directly, we'll gladly help you find the correct resources.".to_string()),
            ..section(8, "Need Assistance?", "💁", "If you encounter issues with a product link or need guidance on navigating Amazon's return process, you can contact us through our Contact page.")
        },
    ]
}

pub fn privacy_policy_sections() -> Vec<PolicySection> {
    vec![
        section(1, "About Smart Wear", "👕", "Smart Wear is an affiliate-based eCommerce platform that showcases fashionable and high-quality T-shirts and apparel. Our goal is to help visitors discover great clothing options available on Amazon. When you click on a product listed on our website, you are redirected to Amazon to complete your purchase. Because we do not sell products directly, we do not collect or store your payment or order information. All transactions are processed securely on Amazon's website, under Amazon's own Privacy Policy and Terms of Service."),
        PolicySection {
            subsections: Some(vec![
                PolicySubsection {
                    title: "Personal Information (You Provide Voluntarily)".to_string(),
                    content: "We do not collect personal data such as your name, address, or payment details for transactions. However, if you contact us via our contact form or email, we may collect information such as your name, email address, and any message or inquiry you submit. This information is used solely to respond to your inquiries or feedback.".to_string(),
                },
                PolicySubsection {
                    title: "Non-Personal / Automatic Information".to_string(),
                    content: "When you browse our website, we may automatically collect limited, non-identifiable data to improve user experience. This may include your IP address, browser type and version, device type and operating system, pages you visited and time spent on the site, referring and exit pages, and clicks and link interactions (including clicks to Amazon). This information is collected through cookies and analytics tools.".to_string(),
                },
            ]),
            ..section(2, "Information We Collect", "📊", "When you visit our website, we may collect two types of information:")
        },
        PolicySection {
            list: Some(strings(&[
                "To personalize and improve your browsing experience on Smart Wear",
                "To monitor website performance and detect technical issues",
                "To analyze user behavior and trends for site optimization",
                "To communicate with you when you reach out through our contact form",
                "To comply with applicable laws and regulations",
            ])),
            note: Some("We do not sell, rent, or trade any user information with third parties for marketing purposes.".to_string()),
            ..section(3, "Use of Collected Information", "🔍", "We may use the collected information for the following purposes:")
        },
        section(4, "Cookies and Tracking Technologies", "🍪", "Smart Wear uses cookies and similar technologies to enhance your browsing experience. Cookies are small text files placed on your device to help us recognize repeat visitors, store preferences, and analyze site performance. We may also use third-party cookies (e.g., Google Analytics or Amazon affiliate tracking cookies) to gather anonymous statistical information and to track clicks for affiliate commissions. You can control or disable cookies through your browser settings. However, disabling cookies may affect some website features or functionality."),
        section(5, "Third-Party Links and Services", "🔗", "Our website contains links to Amazon and possibly other third-party websites. Once you leave Smart Wear and visit another site, we have no control over how that site collects or uses your information. We strongly encourage you to read the Privacy Policy of any third-party website you visit — especially Amazon — to understand their data collection, storage, and sharing practices. Smart Wear is not responsible for the privacy practices, content, or security of external sites."),
        section(6, "Data Security", "🛡️", "We take reasonable administrative and technical measures to protect the limited data we collect against unauthorized access, alteration, disclosure, or destruction. Our website uses secure hosting and modern encryption methods to maintain data integrity. However, please note that no system or data transmission over the internet can be guaranteed to be 100% secure. While we strive to protect your information, you use our website at your own risk."),
        section(7, "Data Retention", "💾", "We only retain personal information (such as email messages from contact forms) for as long as necessary to fulfill the purpose for which it was collected or as required by law. Non-personal data (like analytics) may be stored for statistical purposes but remains anonymous."),
        section(8, "Children's Privacy", "👶", "Smart Wear is intended for general audiences and is not directed at children under 13 years of age. We do not knowingly collect personal information from children. If you believe a child has provided us with personal information, please contact us immediately, and we will take steps to delete it."),
        section(9, "Affiliate Disclosure", "🤝", "Smart Wear participates in affiliate marketing programs, including the Amazon Associates Program. This means we may earn a commission when users click product links and make purchases on Amazon. This commission helps us operate and maintain our website at no additional cost to you. Affiliate tracking uses cookies to identify when a click from Smart Wear leads to a purchase on Amazon. No personal data is shared with us through this process."),
        PolicySection {
            list: Some(strings(&[
                "The right to access the data we hold about you",
                "The right to request correction or deletion of your data",
                "The right to restrict or object to certain data uses",
                "The right to withdraw consent (if applicable)",
            ])),
            note: Some("If you wish to exercise any of these rights, please contact us through our Contact page.".to_string()),
            ..section(10, "Your Rights and Choices", "⚖️", "Depending on your location, you may have certain data protection rights, such as:")
        },
        section(11, "Changes to This Privacy Policy", "🔄", "We may update this Privacy Policy periodically to reflect changes in our practices, technologies, or legal requirements. The updated version will be posted on this page with the revised effective date. We encourage you to review this page occasionally to stay informed about how we protect your information."),
        section(12, "Contact Us", "📞", "If you have any questions, concerns, or feedback regarding our Privacy Policy or data handling practices, please contact us through our Contact page or email us at [your@email.com]. We will do our best to respond promptly and address your concerns."),
    ]
}

pub fn cookie_policy_sections() -> Vec<PolicySection> {
    // Section id 4 was retired upstream; ids are unique, not contiguous.
    vec![
        section(1, "What Are Cookies?", "🍪", "Cookies are small text files that websites store on your computer or mobile device when you visit them. They help websites remember your actions and preferences (such as login details, language, and browsing behavior) over a certain period of time. Cookies are widely used to make websites function efficiently, analyze performance, and deliver personalized experiences to users."),
        PolicySection {
            list: Some(strings(&[
                "Performance and Analytics Cookies: These help us understand how visitors use our website — which pages they visit most, how long they stay, and how they navigate.",
                "Affiliate Tracking Cookies: Smart Wear participates in the Amazon Associates Program, which uses affiliate tracking cookies to track when you click on Amazon product links.",
                "Functionality Cookies: These cookies allow our site to remember certain preferences such as your language, display settings, or region.",
                "Security Cookies: Certain cookies help ensure our site's security by detecting suspicious or malicious activity.",
            ])),
            ..section(2, "How Smart Wear Uses Cookies", "🔍", "Smart Wear uses cookies to enhance your browsing experience, improve website functionality, and analyze user activity. We do not use cookies to collect personal or financial information such as names, payment details, or addresses. Here are the main ways we use cookies:")
        },
        PolicySection {
            list: Some(strings(&[
                "Amazon: to track affiliate link clicks and attribute sales for commission purposes.",
                "Google Analytics (or similar tools): to gather anonymous statistical data about site usage, user behavior, and traffic sources.",
            ])),
            note: Some("These third-party services have their own privacy and cookie policies. Once you leave Smart Wear and go to Amazon or another external site, their policies will apply.".to_string()),
            ..section(3, "Third-Party Cookies", "🔗", "In addition to our own cookies, we may use third-party cookies provided by trusted partners, such as:")
        },
        PolicySection {
            list: Some(strings(&[
                "Accept or reject cookies when you first visit our site (via the cookie consent banner).",
                "Change your cookie settings in your browser at any time.",
                "Delete existing cookies stored on your device.",
            ])),
            browsers: Some(vec![
                BrowserLink { name: "Google Chrome".to_string(), url: "#".to_string() },
                BrowserLink { name: "Mozilla Firefox".to_string(), url: "#".to_string() },
                BrowserLink { name: "Microsoft Edge".to_string(), url: "#".to_string() },
                BrowserLink { name: "Safari".to_string(), url: "#".to_string() },
            ]),
            warning: Some("Disabling cookies may affect how some parts of our website function. Some features may not display correctly or work as intended.".to_string()),
            ..section(5, "Managing and Controlling Cookies", "⚙️", "You have full control over how cookies are used on your device. You can:")
        },
        PolicySection {
            list: Some(strings(&[
                "Session Cookies: Automatically deleted when you close your browser.",
                "Persistent Cookies: Remain stored on your device until they expire or you manually delete them.",
            ])),
            note: Some("We set cookies for the shortest reasonable duration necessary for their purpose.".to_string()),
            ..section(6, "How Long Cookies Stay on Your Device", "⏰", "Cookies may remain on your device for varying lengths of time:")
        },
        section(7, "Changes to This Cookie Policy", "🔄", "Smart Wear may update this Cookie Policy periodically to reflect changes in technology, legal requirements, or our own practices. When we make changes, we'll update the 'Effective Date' at the top of this page. We encourage you to review this page occasionally to stay informed about how we use cookies."),
        section(8, "Your Consent", "✅", "By continuing to browse and use Smart Wear, you consent to our use of cookies as described in this policy. You may withdraw your consent at any time by adjusting your browser settings or rejecting cookies through our website banner."),
        section(9, "Contact Us", "📞", "If you have questions or concerns about our Cookie Policy or how we use tracking technologies, please reach out to us through our Contact page or email us at [your@email.com]. We'll be happy to explain more or help you manage your cookie preferences."),
    ]
}

pub fn cookie_types() -> Vec<CookieType> {
    let row = |kind: &str, purpose: &str, examples: &str| CookieType {
        kind: kind.to_string(),
        purpose: purpose.to_string(),
        examples: examples.to_string(),
    };
    vec![
        row("Strictly Necessary Cookies", "Required for the website to function properly. Without these, some features may not work.", "Session cookies, security cookies"),
        row("Performance Cookies", "Collect data about website usage to improve functionality and content.", "Analytics cookies"),
        row("Functionality Cookies", "Remember user preferences and choices.", "Language settings, display preferences"),
        row("Affiliate Cookies", "Track clicks to Amazon and help us earn commissions.", "Amazon Associates cookies"),
        row("Advertising Cookies", "May be used by third parties (like Amazon) to display relevant ads based on browsing history.", "Amazon Ad Services cookies"),
    ]
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        address: "Texas 3,Webster,TX,77598 ,USA".to_string(),
        phones: [
            "+1 -832-788-6738".to_string(),
            "+1 -832-788-6738".to_string(),
        ],
        socials: SocialLinks {
            facebook: "#".to_string(),
            twitter: "#".to_string(),
            instagram: "#".to_string(),
            tiktok: "#".to_string(),
        },
        hours: BusinessHours {
            sunday_thursday: "9:00 AM - 6:00 PM".to_string(),
            friday_saturday: "Closed".to_string(),
        },
    }
}

pub fn about_content() -> AboutContent {
    AboutContent {
        title: "About Us".to_string(),
        heading: "Smart-Wears: Elevating Bangladeshi Garments to Global Standards".to_string(),
        paragraphs: strings(&[
            "Smart-Wears is a rising apparel brand that exemplifies the excellence of Bangladeshi garment manufacturing. Specializing in high-quality T-shirts, the company has carved out a niche by combining premium materials, ethical production, and smart distribution. Based in Bangladesh — the world's leading producer of quality garments — Smart-Wears leverages the country's rich textile heritage and skilled labor force to deliver products that meet international standards.",
            "Bangladesh has long been recognized as a powerhouse in the global apparel industry. It ranks as the second-largest exporter of ready-made garments (RMG) globally, and is widely regarded as the number one producer of quality garments in terms of value, consistency, and ethical sourcing. The country's garment sector is built on decades of experience, robust infrastructure, and a commitment to sustainability. With over 4,000 factories and millions of skilled workers, Bangladesh supplies major global retailers like H&M, Zara, and Uniqlo — and now, Smart-Wears is joining that elite league.",
            "Smart-Wears focuses on T-shirts, a staple of casual fashion and everyday wear. What sets the brand apart is its attention to detail: from selecting soft, breathable cotton to ensuring precise stitching and vibrant, fade-resistant prints. Each T-shirt is designed to offer comfort, durability, and style — making it ideal for both personal use and gifting. The company maintains strict quality control protocols, ensuring that every piece meets the expectations of American consumers.",
            "The brand's success on Amazon USA is a testament to its strategic vision. By choosing Amazon as its primary sales channel, Smart-Wears taps into a vast marketplace with millions of active buyers. The platform's logistics and customer service infrastructure allow Smart-Wears to offer fast shipping, easy returns, and reliable customer support — all while maintaining competitive pricing. This direct-to-consumer model eliminates middlemen, reduces overhead, and allows the company to invest more in product quality and innovation.",
            "Smart-Wears also reflects a broader shift in global fashion toward ethical sourcing and transparency. Bangladesh's garment industry has made significant strides in improving factory conditions, reducing environmental impact, and empowering workers — especially women. Smart-Wears partners with certified factories that uphold these values, ensuring that every T-shirt is not just well-made, but responsibly produced.",
            "Looking ahead, Smart-Wears aims to expand its product line to include polos, sweatshirts, and activewear — all made in Bangladesh and tailored for the U.S. market. The company is also exploring sustainable fabrics like organic cotton and recycled blends, aligning with the growing demand for eco-friendly fashion.",
            "In essence, Smart-Wears is more than just a T-shirt brand. It's a symbol of Bangladesh's global leadership in garment production and a model for how small companies can thrive by combining local expertise with global reach. As consumers become more conscious of quality and ethics, Smart-Wears stands poised to become a trusted name in everyday fashion — one T-shirt at a time.",
        ]),
    }
}
