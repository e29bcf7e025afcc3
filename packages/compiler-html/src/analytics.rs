//! Tracking snippets for the supported analytics providers

use crate::options::AnalyticsIntegration;

/// Snippets collected from every integration, grouped by where they land
#[derive(Debug, Default)]
pub(crate) struct AnalyticsCode {
    pub head: Vec<String>,
    pub body_start: Vec<String>,
}

#[cfg(test)]
impl AnalyticsCode {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body_start.is_empty()
    }
}

/// Build the snippets for a list of integrations, in the order given
pub(crate) fn generate_analytics(integrations: &[AnalyticsIntegration]) -> AnalyticsCode {
    let mut code = AnalyticsCode::default();

    for integration in integrations {
        let id = integration.tracking_id.trim();

        if !is_valid_tracking_id(id) {
            tracing::warn!(
                provider = %integration.provider,
                tracking_id = %integration.tracking_id,
                "skipping analytics integration with invalid tracking id"
            );
            continue;
        }

        match integration.provider.as_str() {
            "google-analytics" => code.head.push(google_analytics(id)),
            "google-tag-manager" => {
                code.head.push(google_tag_manager(id));
                code.body_start.push(google_tag_manager_noscript(id));
            }
            "facebook-pixel" => code.head.push(facebook_pixel(id)),
            "hotjar" => {
                if !id.chars().all(|c| c.is_ascii_digit()) {
                    tracing::warn!(tracking_id = %id, "hotjar site id must be numeric, skipping");
                    continue;
                }
                code.head.push(hotjar(id));
            }
            "mixpanel" => code.head.push(mixpanel(id)),
            "plausible" => code.head.push(plausible(id)),
            other => {
                tracing::debug!(provider = %other, "ignoring unknown analytics provider");
            }
        }
    }

    code
}

/// Ids are interpolated into script bodies and URLs, so only a safe alphabet is accepted
fn is_valid_tracking_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn google_analytics(id: &str) -> String {
    format!(
        r#"<!-- Google Analytics 4 -->
<script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());
  gtag('config', '{id}');
</script>"#
    )
}

fn google_tag_manager(id: &str) -> String {
    format!(
        r#"<!-- Google Tag Manager -->
<script>(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':
new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],
j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=
'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);
}})(window,document,'script','dataLayer','{id}');</script>
<!-- End Google Tag Manager -->"#
    )
}

fn google_tag_manager_noscript(id: &str) -> String {
    format!(
        r#"<!-- Google Tag Manager (noscript) -->
<noscript><iframe src="https://www.googletagmanager.com/ns.html?id={id}"
height="0" width="0" style="display:none;visibility:hidden"></iframe></noscript>
<!-- End Google Tag Manager (noscript) -->"#
    )
}

fn facebook_pixel(id: &str) -> String {
    format!(
        r#"<!-- Facebook Pixel -->
<script>
!function(f,b,e,v,n,t,s)
{{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?
n.callMethod.apply(n,arguments):n.queue.push(arguments)}};
if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';
n.queue=[];t=b.createElement(e);t.async=!0;
t.src=v;s=b.getElementsByTagName(e)[0];
s.parentNode.insertBefore(t,s)}}(window, document,'script',
'https://connect.facebook.net/en_US/fbevents.js');
fbq('init', '{id}');
fbq('track', 'PageView');
</script>
<noscript><img height="1" width="1" style="display:none"
src="https://www.facebook.com/tr?id={id}&amp;ev=PageView&amp;noscript=1"
/></noscript>"#
    )
}

fn hotjar(id: &str) -> String {
    format!(
        r#"<!-- Hotjar Tracking Code -->
<script>
(function(h,o,t,j,a,r){{
h.hj=h.hj||function(){{(h.hj.q=h.hj.q||[]).push(arguments)}};
h._hjSettings={{hjid:{id},hjsv:6}};
a=o.getElementsByTagName('head')[0];
r=o.createElement('script');r.async=1;
r.src=t+h._hjSettings.hjid+j+h._hjSettings.hjsv;
a.appendChild(r);
}})(window,document,'https://static.hotjar.com/c/hotjar-','.js?sv=');
</script>"#
    )
}

fn mixpanel(id: &str) -> String {
    format!(
        r#"<!-- Mixpanel -->
<script type="text/javascript">
(function(f,b){{if(!b.__SV){{var e,g,i,h;window.mixpanel=b;b._i=[];b.init=function(e,f,c){{function g(a,d){{var b=d.split(".");2==b.length&&(a=a[b[0]],d=b[1]);a[d]=function(){{a.push([d].concat(Array.prototype.slice.call(arguments,0)))}}}}var a=b;"undefined"!==typeof c?a=b[c]=[]:c="mixpanel";a.people=a.people||[];a.toString=function(a){{var d="mixpanel";"mixpanel"!==c&&(d+="."+c);a||(d+=" (stub)");return d}};a.people.toString=function(){{return a.toString(1)+".people (stub)"}};i="disable time_event track track_pageview track_links track_forms register register_once alias unregister identify name_tag set_config reset people.set people.set_once people.unset people.increment people.append people.union people.track_charge people.clear_charges people.delete_user".split(" ");for(h=0;h<i.length;h++)g(a,i[h]);b._i.push([e,f,c])}};b.__SV=1.2;e=f.createElement("script");e.type="text/javascript";e.async=!0;e.src="https://cdn4.mxpnl.com/libs/mixpanel-2-latest.min.js";g=f.getElementsByTagName("script")[0];g.parentNode.insertBefore(e,g)}}}})(document,window.mixpanel||[]);
mixpanel.init("{id}");
</script>"#
    )
}

fn plausible(id: &str) -> String {
    format!(
        r#"<!-- Plausible Analytics -->
<script defer data-domain="{id}" src="https://plausible.io/js/script.js"></script>"#
    )
}
